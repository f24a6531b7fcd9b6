//! Quote arithmetic for the catalog pricing path.
//!
//! Monetary amounts are fixed-precision decimals. The quantity extension
//! (`unit amount * quantity`) runs at full precision; only the amount that
//! leaves the system is rounded, half-up, to two fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;

/// Currency display precision: two fractional digits.
const MONEY_SCALE: u32 = 2;

/// Validate a requested quantity: it must be strictly positive.
///
/// (Finiteness is inherent to `Decimal`; a NaN/infinite JSON number is
/// rejected during deserialization before this runs.)
pub fn validate_quantity(quantity: Decimal) -> Result<(), CoreError> {
    if quantity <= Decimal::ZERO {
        return Err(CoreError::Validation(
            "quantity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Extend a unit amount by a quantity and round to money precision.
///
/// Rounding is half-up (midpoint away from zero) and happens once, here,
/// at the external boundary.
pub fn extend_amount(unit_amount: Decimal, quantity: Decimal) -> Decimal {
    round_money(unit_amount * quantity)
}

/// Round an amount to two fractional digits, half-up.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as a decimal string with exactly two fractional digits.
///
/// This is the only representation amounts cross the HTTP boundary in —
/// never a binary float.
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}
