use bigdecimal::Signed;
use tracing::debug;

use crate::adapters::decimal::{Decimal, DecimalConst, ratio, round};
use crate::hydro::Fluid;

/// Specific gas constant of dry air, J/(kg·K).
pub const R_DRY_AIR: DecimalConst = DecimalConst::new(287058, 3);
/// Offset between °C and K.
pub const ZERO_CELSIUS_IN_KELVIN: DecimalConst = DecimalConst::new(27315, 2);
/// Standard sea-level pressure, Pa.
pub const STANDARD_PRESSURE: DecimalConst = DecimalConst::new(101325, 0);

/// A parcel of liquid with a fixed density (kg/m³) and volume (m³).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Liquid {
    density: Decimal,
    volume: Decimal,
}

impl Liquid {
    pub fn new(density: Decimal, volume: Decimal) -> Self {
        Self { density, volume }
    }

    pub fn volume(&self) -> &Decimal {
        &self.volume
    }

    pub fn mass(&self) -> Decimal {
        round(&self.density * &self.volume)
    }
}

impl Fluid for Liquid {
    fn density(&self, _temperature: &Decimal) -> Option<Decimal> {
        Some(self.density.clone())
    }
}

/// A compressed gas charge, e.g. the air in a diving cylinder.
///
/// `density` is measured at a reference pressure; `compression` is the
/// dimensionless ratio of fill pressure to that reference pressure, so the
/// charge holds `density · volume · compression` kg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gas {
    density: Decimal,
    volume: Decimal,
    compression: Decimal,
}

impl Gas {
    pub fn new(density: Decimal, volume: Decimal, compression: Decimal) -> Self {
        Self {
            density,
            volume,
            compression,
        }
    }

    /// Density at the reference pressure, kg/m³.
    pub fn reference_density(&self) -> &Decimal {
        &self.density
    }

    pub fn volume(&self) -> &Decimal {
        &self.volume
    }

    pub fn compression(&self) -> &Decimal {
        &self.compression
    }

    pub fn mass(&self) -> Decimal {
        round(&self.density * &self.volume * &self.compression)
    }
}

impl Fluid for Gas {
    fn density(&self, _temperature: &Decimal) -> Option<Decimal> {
        Some(self.density.clone())
    }
}

/// Dry air treated as an ideal gas at a fixed pressure (Pa).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DryAir {
    pressure: Decimal,
}

impl DryAir {
    pub fn new(pressure: Decimal) -> Self {
        Self { pressure }
    }

    pub fn pressure(&self) -> &Decimal {
        &self.pressure
    }
}

impl Default for DryAir {
    fn default() -> Self {
        Self::new(STANDARD_PRESSURE.value())
    }
}

impl Fluid for DryAir {
    /// `p / (R · T)`, undefined at or below absolute zero.
    fn density(&self, temperature: &Decimal) -> Option<Decimal> {
        let kelvin = temperature + ZERO_CELSIUS_IN_KELVIN.value();
        if !kelvin.is_positive() {
            debug!(temperature = %temperature, "air density undefined at or below absolute zero");
            return None;
        }
        ratio(&self.pressure, &(R_DRY_AIR.value() * kelvin))
    }
}
