#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod adapters;
pub mod correlation;
pub mod error;
pub mod hydro;
pub mod models;

pub use crate::adapters::decimal::{Decimal, DecimalConst, parse as parse_decimal};
#[cfg(feature = "std")]
pub use crate::error::AppError;
pub use crate::error::HydroError;
pub use crate::hydro::{
    CompositeSolid, Cylinder, DryAir, Fluid, Gas, HomogeneousSolid, HydrostaticSummary,
    Hydrostatic, Liquid, SaltedLiquid, Solid, SolidBuilder, SolidKind, Verdict, compute_summary,
    seawater,
};
pub use crate::models::{Conditions, Piece, Scenario};
