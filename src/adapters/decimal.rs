//! Decimal arithmetic context shared by every hydrostatic computation.
//!
//! All physical quantities are `bigdecimal::BigDecimal` values. Sums and
//! products are exact; quotients and the final value of a derived quantity are
//! rounded to [`SIGNIFICANT_DIGITS`] with half-even rounding, the same context
//! as IEEE 754 decimal128. Results therefore reproduce digit for digit across
//! platforms.

use alloc::string::ToString;
use core::num::NonZeroU64;
use core::str::FromStr;

use bigdecimal::{BigDecimal, Context, RoundingMode, Zero};

use crate::error::HydroError;

pub type Decimal = BigDecimal;

/// Significant digits carried by the decimal context.
pub const SIGNIFICANT_DIGITS: NonZeroU64 = match NonZeroU64::new(34) {
    Some(digits) => digits,
    None => unreachable!(),
};

/// A decimal literal usable in `const` position: `digits · 10^-scale`.
///
/// `DecimalConst::new(2034, 5)` is `0.02034`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalConst {
    digits: i64,
    scale: i64,
}

impl DecimalConst {
    pub const fn new(digits: i64, scale: i64) -> Self {
        Self { digits, scale }
    }

    pub fn value(self) -> Decimal {
        BigDecimal::new(self.digits.into(), self.scale)
    }
}

/// The shared context: [`SIGNIFICANT_DIGITS`] digits, half-even rounding.
pub fn context() -> Context {
    Context::new(SIGNIFICANT_DIGITS, RoundingMode::HalfEven)
}

/// Rounds `value` to the shared context. Values that already fit are
/// returned unchanged, so no trailing zeros are introduced.
pub fn round(value: Decimal) -> Decimal {
    if value.digits() > SIGNIFICANT_DIGITS.get() {
        context().round_decimal(value)
    } else {
        value
    }
}

/// Parses a decimal in plain (`0.08`) or scientific (`1e3`) notation.
pub fn parse(text: &str) -> Result<Decimal, HydroError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed).map_err(|_| HydroError::InvalidNumber(trimmed.to_string()))
}

/// `numerator / denominator` in the shared context, or `None` for a zero
/// divisor.
pub fn ratio(numerator: &Decimal, denominator: &Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    Some(round(numerator / denominator))
}

/// `min <= value < max`
pub fn in_half_open(value: &Decimal, min: &Decimal, max: &Decimal) -> bool {
    value >= min && value < max
}

#[cfg(test)]
pub(crate) fn dec(text: &str) -> Decimal {
    parse(text).unwrap()
}
