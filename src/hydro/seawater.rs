use bigdecimal::Signed;
use serde::Serialize;

use crate::adapters::decimal::Decimal;

use crate::correlation::seawater_density;
use crate::error::HydroError;
use crate::hydro::Fluid;

/// Water with a fixed mass fraction of dissolved salt.
///
/// Density follows [`crate::correlation`] and is undefined outside the
/// correlation domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaltedLiquid {
    salinity: Decimal,
}

impl SaltedLiquid {
    /// `salinity` in kg/kg. Fresh water has salinity `0`.
    ///
    /// Fails immediately for a negative salinity. Salinities at or above the
    /// correlation's upper bound are accepted; their density is undefined.
    pub fn new(salinity: Decimal) -> Result<Self, HydroError> {
        if salinity.is_negative() {
            return Err(HydroError::InvalidSalinity(salinity));
        }
        Ok(Self { salinity })
    }

    pub fn salinity(&self) -> &Decimal {
        &self.salinity
    }
}

impl Fluid for SaltedLiquid {
    fn density(&self, temperature: &Decimal) -> Option<Decimal> {
        seawater_density(&self.salinity, temperature)
    }
}

/// Builds seawater of the given salinity (kg/kg).
pub fn seawater(salinity: Decimal) -> Result<SaltedLiquid, HydroError> {
    SaltedLiquid::new(salinity)
}
