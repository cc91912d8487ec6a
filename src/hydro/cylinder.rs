use bigdecimal::Signed;

use crate::adapters::decimal::{Decimal, ratio};
use crate::error::HydroError;
use crate::hydro::Hydrostatic;
use crate::hydro::fluid::Gas;

/// A pressure vessel (e.g. a scuba tank) and its content.
///
/// The displaced volume is the inner `capacity` plus the volume of the shell
/// material, `shell_mass / shell_density`. The content adds mass but no
/// volume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cylinder {
    capacity: Decimal,
    shell_volume: Decimal,
    shell_mass: Decimal,
    content_mass: Decimal,
}

impl Cylinder {
    /// `capacity` in m³, `shell_density` in kg/m³, masses in kg.
    pub fn new(
        capacity: Decimal,
        shell_density: Decimal,
        shell_mass: Decimal,
        content_mass: Decimal,
    ) -> Result<Self, HydroError> {
        if !shell_density.is_positive() {
            return Err(HydroError::InvalidMaterialDensity(shell_density));
        }
        let shell_volume = ratio(&shell_mass, &shell_density)
            .ok_or(HydroError::InvalidMaterialDensity(shell_density))?;
        Ok(Self {
            capacity,
            shell_volume,
            shell_mass,
            content_mass,
        })
    }

    /// The same cylinder filled with `gas`; the charge fills the capacity.
    pub fn charged(self, gas: &Gas) -> Self {
        let charge = Gas::new(
            gas.reference_density().clone(),
            self.capacity.clone(),
            gas.compression().clone(),
        );
        Self {
            content_mass: charge.mass(),
            ..self
        }
    }

    pub fn capacity(&self) -> &Decimal {
        &self.capacity
    }

    pub fn content_mass(&self) -> &Decimal {
        &self.content_mass
    }
}

impl Hydrostatic for Cylinder {
    fn volume(&self) -> Decimal {
        &self.capacity + &self.shell_volume
    }

    fn mass(&self) -> Decimal {
        &self.shell_mass + &self.content_mass
    }

    fn density(&self, _temperature: &Decimal) -> Option<Decimal> {
        ratio(&self.mass(), &self.volume())
    }
}
