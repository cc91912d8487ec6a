use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::adapters::decimal::{Decimal, DecimalConst};

/// One volume (m³) / mass (kg) pair of a solid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub volume: Decimal,
    pub mass: Decimal,
}

/// Water conditions the solid is immersed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    /// °C
    pub temperature: Decimal,
    /// kg/kg
    pub salinity: Decimal,
}

/// 20 °C
pub const DEFAULT_TEMPERATURE: DecimalConst = DecimalConst::new(200, 1);
/// Typical open ocean, kg/kg.
pub const DEFAULT_SALINITY: DecimalConst = DecimalConst::new(35, 3);

impl Default for Conditions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE.value(),
            salinity: DEFAULT_SALINITY.value(),
        }
    }
}

impl Conditions {
    pub fn with_overrides(mut self, temperature: Option<Decimal>, salinity: Option<Decimal>) -> Self {
        if let Some(t) = temperature {
            self.temperature = t;
        }
        if let Some(s) = salinity {
            self.salinity = s;
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub pieces: Vec<Piece>,
    #[serde(default)]
    pub conditions: Conditions,
}
