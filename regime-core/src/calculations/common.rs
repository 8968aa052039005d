//! Shared helpers for rupee arithmetic.

use rust_decimal::Decimal;

/// Rounds a value to the nearest whole rupee using half-up rounding.
///
/// Values at exactly .5 round away from zero, matching how the statutory
/// tables are published.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_rupees;
///
/// assert_eq!(round_rupees(dec!(4100.4)), dec!(4100));
/// assert_eq!(round_rupees(dec!(4100.5)), dec!(4101));
/// ```
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a value at zero. Liability arithmetic never propagates a negative
/// intermediate.
pub fn floor_zero(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}
