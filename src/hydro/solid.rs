use alloc::vec::Vec;

use bigdecimal::{Signed, Zero};
use serde::Serialize;
use tracing::debug;

use crate::adapters::decimal::{Decimal, ratio, round};
use crate::error::HydroError;
use crate::hydro::Hydrostatic;

/// A solid of uniform composition.
///
/// The density of a rigid homogeneous solid is modelled as independent of
/// temperature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomogeneousSolid {
    volume: Decimal,
    mass: Decimal,
}

impl HomogeneousSolid {
    /// `volume` in m³, `mass` in kg. Values are kept exactly as given.
    pub fn new(volume: Decimal, mass: Decimal) -> Self {
        Self { volume, mass }
    }
}

impl Hydrostatic for HomogeneousSolid {
    fn volume(&self) -> Decimal {
        self.volume.clone()
    }

    fn mass(&self) -> Decimal {
        self.mass.clone()
    }

    /// `mass / volume`; undefined for a non-positive volume.
    fn density(&self, _temperature: &Decimal) -> Option<Decimal> {
        if !self.volume.is_positive() {
            debug!(volume = %self.volume, "density undefined for non-positive volume");
            return None;
        }
        ratio(&self.mass, &self.volume)
    }
}

/// Physically joined solids acting as one hydrostatic unit.
///
/// The constituent list is owned and never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeSolid {
    constituents: Vec<Solid>,
}

impl CompositeSolid {
    pub fn new(constituents: Vec<Solid>) -> Result<Self, HydroError> {
        if constituents.is_empty() {
            return Err(HydroError::NoConstituents);
        }
        Ok(Self { constituents })
    }

    pub fn constituents(&self) -> &[Solid] {
        &self.constituents
    }
}

impl Hydrostatic for CompositeSolid {
    /// Exact sum of the constituent volumes; never rounded.
    fn volume(&self) -> Decimal {
        self.constituents.iter().map(Hydrostatic::volume).sum()
    }

    /// Exact sum of the constituent masses; never rounded.
    fn mass(&self) -> Decimal {
        self.constituents.iter().map(Hydrostatic::mass).sum()
    }

    /// Mass-weighted average of the constituent densities,
    /// `Σ (mᵢ / M) · ρᵢ(T)`.
    ///
    /// Undefined when the total mass is zero or any constituent density is
    /// undefined.
    fn density(&self, temperature: &Decimal) -> Option<Decimal> {
        let total = self.mass();
        if total.is_zero() {
            debug!("composite density undefined for zero total mass");
            return None;
        }
        self.constituents
            .iter()
            .try_fold(Decimal::zero(), |acc, solid| {
                let share = ratio(&solid.mass(), &total)?;
                Some(acc + round(share * solid.density(temperature)?))
            })
            .map(round)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidKind {
    Homogeneous,
    Composite,
}

/// A solid body: either homogeneous or a composite of other solids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solid {
    Homogeneous(HomogeneousSolid),
    Composite(CompositeSolid),
}

impl Solid {
    pub fn kind(&self) -> SolidKind {
        match self {
            Solid::Homogeneous(_) => SolidKind::Homogeneous,
            Solid::Composite(_) => SolidKind::Composite,
        }
    }

    /// Number of directly held constituents (1 for a homogeneous solid).
    pub fn constituent_count(&self) -> usize {
        match self {
            Solid::Homogeneous(_) => 1,
            Solid::Composite(c) => c.constituents().len(),
        }
    }
}

impl Hydrostatic for Solid {
    fn volume(&self) -> Decimal {
        match self {
            Solid::Homogeneous(s) => s.volume(),
            Solid::Composite(s) => s.volume(),
        }
    }

    fn mass(&self) -> Decimal {
        match self {
            Solid::Homogeneous(s) => s.mass(),
            Solid::Composite(s) => s.mass(),
        }
    }

    fn density(&self, temperature: &Decimal) -> Option<Decimal> {
        match self {
            Solid::Homogeneous(s) => s.density(temperature),
            Solid::Composite(s) => s.density(temperature),
        }
    }
}

impl From<HomogeneousSolid> for Solid {
    fn from(solid: HomogeneousSolid) -> Self {
        Solid::Homogeneous(solid)
    }
}

impl From<CompositeSolid> for Solid {
    fn from(solid: CompositeSolid) -> Self {
        Solid::Composite(solid)
    }
}
