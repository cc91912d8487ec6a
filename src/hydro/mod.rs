//! Hydrostatic bodies and the fluids they are immersed in.

pub mod builder;
pub mod cylinder;
pub mod fluid;
pub mod seawater;
pub mod solid;
pub mod summary;

use bigdecimal::{Signed, Zero};
use serde::Serialize;

use crate::adapters::decimal::{Decimal, round};

pub use builder::SolidBuilder;
pub use cylinder::Cylinder;
pub use fluid::{DryAir, Gas, Liquid};
pub use seawater::{SaltedLiquid, seawater};
pub use solid::{CompositeSolid, HomogeneousSolid, Solid, SolidKind};
pub use summary::{HydrostaticSummary, compute_summary};

/// A body described by its hydrostatic characteristics.
///
/// Volumes are in m³, masses in kg, densities in kg/m³ and buoyancy in kg
/// (mass-equivalent of the net vertical force).
pub trait Hydrostatic {
    fn volume(&self) -> Decimal;

    fn mass(&self) -> Decimal;

    /// Density at `temperature` (°C), or `None` if undefined.
    fn density(&self, temperature: &Decimal) -> Option<Decimal>;

    /// Buoyancy of the fully immersed body in a fluid of density
    /// `fluid_density`: `ρ·volume − mass`.
    ///
    /// A positive result means the body floats. Decimal arithmetic is
    /// unbounded, so the result is always defined.
    fn buoyancy(&self, fluid_density: &Decimal) -> Decimal {
        round(fluid_density * self.volume() - self.mass())
    }

    /// Buoyancy in `fluid` at `temperature`. Undefined whenever the fluid's
    /// density is undefined.
    fn buoyancy_in<F>(&self, fluid: &F, temperature: &Decimal) -> Option<Decimal>
    where
        F: Fluid + ?Sized,
        Self: Sized,
    {
        fluid
            .density(temperature)
            .map(|rho| self.buoyancy(&rho))
    }

    fn verdict(&self, fluid_density: &Decimal) -> Verdict {
        Verdict::from_buoyancy(&self.buoyancy(fluid_density))
    }
}

/// A fluid whose density may depend on temperature (°C).
pub trait Fluid {
    fn density(&self, temperature: &Decimal) -> Option<Decimal>;
}

/// Sign of the net buoyancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Floats,
    Neutral,
    Sinks,
}

impl Verdict {
    pub fn from_buoyancy(buoyancy: &Decimal) -> Self {
        if buoyancy.is_zero() {
            Self::Neutral
        } else if buoyancy.is_positive() {
            Self::Floats
        } else {
            Self::Sinks
        }
    }
}

impl core::fmt::Display for Verdict {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Floats => "floats",
            Self::Neutral => "neutral",
            Self::Sinks => "sinks",
        })
    }
}
