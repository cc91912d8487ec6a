//! Correlation module: empirical density of saline water as a function of
//! salinity and temperature.
//!
//! This module provides:
//! - The ten coefficients of the seawater density polynomial (Sharqawy, Lienhard
//!   and Zubair, "The thermophysical properties of seawater: A review of existing
//!   correlations and data", Eq. 8)
//! - The validated domain of the fit (salinity and temperature bounds)
//! - A pure evaluation function returning `None` outside that domain
//!
//! Units conventions:
//! - Salinity is a mass fraction in kg/kg (fresh water is `0`, open ocean ≈ `0.035`)
//! - Temperature is in °C
//! - Density is in kg/m³
//!
//! The polynomial reads
//!
//! ```text
//! ρ = A1 + A2·T + A3·T² + A4·T³ + A5·T⁴ + B1·S + B2·S·T + B3·S·T² + B4·S·T³ + B5·S²·T²
//! ```
//!
//! and is accurate to ±0.1 % for `0 ≤ S < 0.160` and `0 ≤ T < 180`. Both bounds
//! are half-open. Nothing is extrapolated: outside the domain there is no value.
//!
//! # Examples
//! ```rust
//! use hydrostat::correlation::seawater_density;
//! use hydrostat::parse_decimal;
//!
//! let rho = seawater_density(&parse_decimal("0.08")?, &parse_decimal("20")?).unwrap();
//! assert_eq!(rho, parse_decimal("1059.4908435072")?);
//! assert!(seawater_density(&parse_decimal("0.08")?, &parse_decimal("185")?).is_none());
//! # Ok::<(), hydrostat::HydroError>(())
//! ```
//!
//! # Panics
//! None. Every term is an exact product; only the final sum is rounded to the
//! shared decimal context.
use tracing::debug;

use crate::adapters::decimal::{Decimal, DecimalConst, in_half_open, round};

/// Lower salinity bound (inclusive), kg/kg.
pub const MIN_SALINITY: DecimalConst = DecimalConst::new(0, 0);
/// Upper salinity bound (exclusive), kg/kg.
pub const MAX_SALINITY: DecimalConst = DecimalConst::new(160, 3);
/// Lower temperature bound (inclusive), °C.
pub const MIN_TEMPERATURE: DecimalConst = DecimalConst::new(0, 0);
/// Upper temperature bound (exclusive), °C.
pub const MAX_TEMPERATURE: DecimalConst = DecimalConst::new(1800, 1);
/// Relative accuracy of the fit (±0.1 %).
pub const ACCURACY: DecimalConst = DecimalConst::new(1, 3);

/// Constant term: fresh water at 0 °C, kg/m³.
pub const A1: DecimalConst = DecimalConst::new(9999, 1);
/// Coefficient of `T`.
pub const A2: DecimalConst = DecimalConst::new(2034, 5);
/// Coefficient of `T²`.
pub const A3: DecimalConst = DecimalConst::new(-6162, 6);
/// Coefficient of `T³`.
pub const A4: DecimalConst = DecimalConst::new(2261, 8);
/// Coefficient of `T⁴`.
pub const A5: DecimalConst = DecimalConst::new(-4657, 11);

/// Coefficient of `S`.
pub const B1: DecimalConst = DecimalConst::new(8020, 1);
/// Coefficient of `S·T`.
pub const B2: DecimalConst = DecimalConst::new(-2001, 3);
/// Coefficient of `S·T²`.
pub const B3: DecimalConst = DecimalConst::new(1677, 5);
/// Coefficient of `S·T³`.
pub const B4: DecimalConst = DecimalConst::new(-3060, 8);
/// Coefficient of `S²·T²`.
pub const B5: DecimalConst = DecimalConst::new(-1613, 8);

pub fn salinity_in_domain(salinity: &Decimal) -> bool {
    in_half_open(salinity, &MIN_SALINITY.value(), &MAX_SALINITY.value())
}

pub fn temperature_in_domain(temperature: &Decimal) -> bool {
    in_half_open(temperature, &MIN_TEMPERATURE.value(), &MAX_TEMPERATURE.value())
}

/// Density of saline water in kg/m³.
///
/// Inputs:
/// - `salinity`: mass fraction of dissolved salt (kg/kg)
/// - `temperature`: °C
///
/// Returns `None` when either input lies outside the validated domain; callers
/// must treat that as "no value", never as zero.
pub fn seawater_density(salinity: &Decimal, temperature: &Decimal) -> Option<Decimal> {
    if !salinity_in_domain(salinity) || !temperature_in_domain(temperature) {
        debug!(
            salinity = %salinity,
            temperature = %temperature,
            "seawater density undefined outside correlation domain"
        );
        return None;
    }

    let t1 = temperature;
    let t2 = t1 * t1;
    let t3 = &t2 * t1;
    let t4 = &t3 * t1;
    let s1 = salinity;
    let s2 = s1 * s1;

    let rho = A1.value()
        + A2.value() * t1
        + A3.value() * &t2
        + A4.value() * &t3
        + A5.value() * &t4
        + B1.value() * s1
        + B2.value() * s1 * t1
        + B3.value() * s1 * &t2
        + B4.value() * s1 * &t3
        + B5.value() * &s2 * &t2;
    Some(round(rho))
}
