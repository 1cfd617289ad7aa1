//! Common utility functions for price calculations.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Rounds a decimal value to a whole number using half-up rounding.
///
/// Values at exactly .5 are rounded away from zero, which for the
/// non-negative amounts used in quotes means upward.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(1234.4)), dec!(1234));
/// assert_eq!(round_whole(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_whole(dec!(1234.6)), dec!(1235));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Scales a whole amount by `factor` and rounds the result to a whole amount.
///
/// Negative results clamp to zero; results beyond `u64` saturate.
pub fn scale_amount(
    amount: u64,
    factor: Decimal,
) -> u64 {
    let scaled = round_whole(Decimal::from(amount) * factor);
    if scaled.is_sign_negative() {
        return 0;
    }
    scaled.to_u64().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_down_below_midpoint() {
        let result = round_whole(dec!(1199.4));

        assert_eq!(result, dec!(1199));
    }

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        let result = round_whole(dec!(1199.5));

        assert_eq!(result, dec!(1200));
    }

    #[test]
    fn round_whole_preserves_whole_values() {
        let result = round_whole(dec!(1200));

        assert_eq!(result, dec!(1200));
    }

    #[test]
    fn round_whole_handles_zero() {
        let result = round_whole(dec!(0.0));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // scale_amount tests
    // =========================================================================

    #[test]
    fn scale_amount_applies_factor() {
        assert_eq!(scale_amount(1000, dec!(1.2)), 1200);
    }

    #[test]
    fn scale_amount_rounds_half_up() {
        // 1.2 * 1 = 1.2 -> 1, 1.2 * 3 = 3.6 -> 4, 1.2 * 5 = 6.0
        assert_eq!(scale_amount(1, dec!(1.2)), 1);
        assert_eq!(scale_amount(3, dec!(1.2)), 4);
        assert_eq!(scale_amount(5, dec!(1.2)), 6);
        // 1.5 * 5 = 7.5 -> 8
        assert_eq!(scale_amount(5, dec!(1.5)), 8);
    }

    #[test]
    fn scale_amount_clamps_negative_factor() {
        assert_eq!(scale_amount(100, dec!(-1)), 0);
    }

    #[test]
    fn scale_amount_of_zero_is_zero() {
        assert_eq!(scale_amount(0, dec!(1.2)), 0);
    }
}
