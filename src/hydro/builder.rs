use alloc::vec::Vec;

use tracing::trace;

use crate::adapters::decimal::Decimal;
use crate::error::HydroError;
use crate::hydro::Hydrostatic;
use crate::hydro::solid::{CompositeSolid, HomogeneousSolid, Solid};
use crate::models::Piece;

/// Accumulates volume/mass pairs and turns them into a [`Solid`].
///
/// One pair yields a homogeneous solid, several pairs a composite. The
/// builder is consumed by [`SolidBuilder::build`], so the built solid never
/// shares its constituent list with a builder that is still in use.
///
/// ```rust
/// use hydrostat::{Hydrostatic, SolidBuilder, parse_decimal};
///
/// let solid = SolidBuilder::new()
///     .add(parse_decimal("1")?, parse_decimal("1000")?)
///     .add(parse_decimal("0.1")?, parse_decimal("1500")?)
///     .build()?;
/// assert_eq!(solid.mass(), parse_decimal("2500")?);
/// # Ok::<(), hydrostat::HydroError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SolidBuilder {
    solids: Vec<HomogeneousSolid>,
}

impl SolidBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a volume (m³) / mass (kg) pair.
    pub fn add(mut self, volume: Decimal, mass: Decimal) -> Self {
        self.solids.push(HomogeneousSolid::new(volume, mass));
        self
    }

    /// Adds any hydrostatic body as a single volume/mass pair, taken at the
    /// time of the call.
    pub fn add_body<B: Hydrostatic + ?Sized>(self, body: &B) -> Self {
        self.add(body.volume(), body.mass())
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn build(self) -> Result<Solid, HydroError> {
        let mut solids = self.solids;
        match solids.len() {
            0 => Err(HydroError::EmptyBuilder),
            1 => {
                trace!("building homogeneous solid");
                Ok(Solid::Homogeneous(solids.remove(0)))
            }
            n => {
                trace!(constituents = n, "building composite solid");
                let constituents = solids.into_iter().map(Solid::from).collect();
                Ok(Solid::Composite(CompositeSolid::new(constituents)?))
            }
        }
    }
}

impl Extend<Piece> for SolidBuilder {
    fn extend<I: IntoIterator<Item = Piece>>(&mut self, pieces: I) {
        self.solids.extend(
            pieces
                .into_iter()
                .map(|p| HomogeneousSolid::new(p.volume, p.mass)),
        );
    }
}

impl FromIterator<Piece> for SolidBuilder {
    fn from_iter<I: IntoIterator<Item = Piece>>(pieces: I) -> Self {
        let mut builder = Self::new();
        builder.extend(pieces);
        builder
    }
}
