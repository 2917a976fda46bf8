//! Naira currency formatting.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

pub const NAIRA_SIGN: char = '₦';

/// Formats an amount as Naira: `₦` prefix, comma thousands grouping, and at
/// most two fractional digits with trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::format_naira;
///
/// assert_eq!(format_naira(dec!(1234567.891)), "₦1,234,567.89");
/// assert_eq!(format_naira(dec!(21000.00)), "₦21,000");
/// assert_eq!(format_naira(dec!(1500.50)), "₦1,500.5");
/// assert_eq!(format_naira(dec!(-2500.25)), "-₦2,500.25");
/// ```
pub fn format_naira(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().normalize().to_string();
    let (integer_part, fraction_part) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = format!("{sign}{NAIRA_SIGN}{}", group_thousands(integer_part));
    if let Some(fraction) = fraction_part {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

/// Inserts a comma between every group of three digits, counting from the right.
fn group_thousands(integer_part: &str) -> String {
    let len = integer_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_has_no_fraction() {
        assert_eq!(format_naira(Decimal::ZERO), "₦0");
        assert_eq!(format_naira(dec!(0.00)), "₦0");
    }

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(format_naira(dec!(999)), "₦999");
        assert_eq!(format_naira(dec!(0.5)), "₦0.5");
    }

    #[test]
    fn thousands_are_grouped_with_commas() {
        assert_eq!(format_naira(dec!(1000)), "₦1,000");
        assert_eq!(format_naira(dec!(25000000)), "₦25,000,000");
        assert_eq!(format_naira(dec!(100000)), "₦100,000");
    }

    #[test]
    fn fraction_is_rounded_half_up_to_kobo() {
        assert_eq!(format_naira(dec!(0.005)), "₦0.01");
        assert_eq!(format_naira(dec!(999.999)), "₦1,000");
    }

    #[test]
    fn trailing_fraction_zeros_are_dropped() {
        assert_eq!(format_naira(dec!(368000.00)), "₦368,000");
        assert_eq!(format_naira(dec!(21000.10)), "₦21,000.1");
    }

    #[test]
    fn negative_amounts_carry_a_leading_minus() {
        assert_eq!(format_naira(dec!(-1000000)), "-₦1,000,000");
    }

    #[test]
    fn largest_decimal_is_fully_grouped() {
        assert_eq!(
            format_naira(Decimal::MAX),
            "₦79,228,162,514,264,337,593,543,950,335"
        );
        assert_eq!(
            format_naira(Decimal::MIN),
            "-₦79,228,162,514,264,337,593,543,950,335"
        );
    }

    #[test]
    fn capped_amount_formats_without_exponent() {
        assert_eq!(
            format_naira(crate::calculations::common::MAX_AMOUNT),
            "₦1,000,000,000,000,000,000,000,000"
        );
    }

    #[test]
    fn negative_value_rounding_to_zero_has_no_sign() {
        assert_eq!(format_naira(dec!(-0.001)), "₦0");
    }
}
