//! Rounding and clamping helpers shared by the PIT and CIT calculators.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Largest amount, in either direction, the calculators work with: one
/// septillion naira (10^24).
///
/// Inputs beyond it are capped so that subtraction and the ×12 annualisation
/// stay inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_701_131_776, 466_537_709, 54_210, false, 0);

/// Rounds a value to the nearest kobo (two decimal places), half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(21000.114)), dec!(21000.11));
/// assert_eq!(round_half_up(dec!(21000.115)), dec!(21000.12));
/// assert_eq!(round_half_up(dec!(-0.035)), dec!(-0.04));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Caps `value` to `[-MAX_AMOUNT, MAX_AMOUNT]`.
pub fn clamp_amount(value: Decimal) -> Decimal {
    if value.abs() <= MAX_AMOUNT {
        return value;
    }
    warn!(%value, "amount outside supported range, capped");
    if value.is_sign_negative() { -MAX_AMOUNT } else { MAX_AMOUNT }
}

/// Clamps negative values to zero.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Expresses `tax` as a percentage of `base`, rounded to two places.
///
/// A zero (or negative) base has no meaningful rate and yields zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::effective_rate;
///
/// assert_eq!(effective_rate(dec!(32000), dec!(400000)), dec!(8.00));
/// assert_eq!(effective_rate(dec!(0), dec!(0)), dec!(0));
/// ```
pub fn effective_rate(
    tax: Decimal,
    base: Decimal,
) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(tax / base * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(10500.0349)), dec!(10500.03));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.035)), dec!(0.04));
    }

    #[test]
    fn round_half_up_keeps_whole_naira() {
        assert_eq!(round_half_up(dec!(5000000)), dec!(5000000));
    }

    #[test]
    fn round_half_up_carries_into_integer_part() {
        assert_eq!(round_half_up(dec!(999999.995)), dec!(1000000.00));
    }

    // =========================================================================
    // clamp_amount tests
    // =========================================================================

    #[test]
    fn max_amount_is_ten_to_the_twenty_fourth() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000000000000000));
    }

    #[test]
    fn clamp_amount_passes_ordinary_values_through() {
        assert_eq!(clamp_amount(dec!(-2500000.75)), dec!(-2500000.75));
        assert_eq!(clamp_amount(MAX_AMOUNT), MAX_AMOUNT);
    }

    #[test]
    fn clamp_amount_caps_both_directions() {
        assert_eq!(clamp_amount(Decimal::MAX), MAX_AMOUNT);
        assert_eq!(clamp_amount(Decimal::MIN), -MAX_AMOUNT);
    }

    // =========================================================================
    // floor_at_zero tests
    // =========================================================================

    #[test]
    fn floor_at_zero_clamps_negative() {
        assert_eq!(floor_at_zero(dec!(-100000)), Decimal::ZERO);
    }

    #[test]
    fn floor_at_zero_passes_positive_through() {
        assert_eq!(floor_at_zero(dec!(250000.50)), dec!(250000.50));
    }

    // =========================================================================
    // effective_rate tests
    // =========================================================================

    #[test]
    fn effective_rate_rounds_repeating_fraction() {
        // 6.5m / 30m = 21.666...%
        assert_eq!(effective_rate(dec!(6500000), dec!(30000000)), dec!(21.67));
    }

    #[test]
    fn effective_rate_is_zero_for_negative_base() {
        assert_eq!(effective_rate(dec!(100), dec!(-5)), Decimal::ZERO);
    }
}
