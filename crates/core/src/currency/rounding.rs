//! Rounding rules for currency amounts.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Never round intermediate conversion results
//! - Round only when rendering or when a caller asks for a settled amount
//! - Use banker's rounding (round half to even)

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a decimal value using Banker's Rounding.
///
/// Uses `RoundingStrategy::MidpointNearestEven`, which:
/// - Rounds 2.5 → 2 (to nearest even)
/// - Rounds 3.5 → 4 (to nearest even)
/// - Rounds 2.25 → 2.2 (to nearest even at 1 decimal)
/// - Rounds 2.35 → 2.4 (to nearest even at 1 decimal)
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use mizan_core::currency::rounding::round_bankers;
///
/// assert_eq!(round_bankers(dec!(2.345), 2), dec!(2.34));
/// ```
#[must_use]
pub fn round_bankers(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
