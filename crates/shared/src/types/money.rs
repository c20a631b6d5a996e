//! Monetary rounding rules.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`, rounded to 2 fraction digits
//! with banker's rounding (round-half-to-even).

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits carried by monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Fraction digits carried by percentage values.
pub const PERCENT_SCALE: u32 = 2;

/// Rounds a monetary amount to [`MONEY_SCALE`] digits using banker's rounding.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a percentage to [`PERCENT_SCALE`] digits using banker's rounding.
#[must_use]
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PERCENT_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Computes `part / whole * 100`, rounded to [`PERCENT_SCALE`] digits.
///
/// Returns `None` when `whole` is zero or negative, so callers decide how
/// an undefined ratio is reported.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(10.004), dec!(10.00))]
    #[case(dec!(10.006), dec!(10.01))]
    // Banker's rounding: ties go to the even neighbor.
    #[case(dec!(0.125), dec!(0.12))]
    #[case(dec!(0.135), dec!(0.14))]
    #[case(dec!(-0.125), dec!(-0.12))]
    #[case(dec!(-10.006), dec!(-10.01))]
    fn test_round_money(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_money(input), expected);
    }

    #[test]
    fn test_percent_of_basic() {
        assert_eq!(percent_of(dec!(20000), dec!(100000)), Some(dec!(20.00)));
        assert_eq!(percent_of(dec!(1), dec!(3)), Some(dec!(33.33)));
    }

    #[test]
    fn test_percent_of_undefined_for_zero_whole() {
        assert_eq!(percent_of(dec!(100), Decimal::ZERO), None);
    }

    #[test]
    fn test_percent_of_undefined_for_negative_whole() {
        assert_eq!(percent_of(dec!(100), dec!(-50)), None);
    }

    #[test]
    fn test_percent_of_can_exceed_one_hundred() {
        // Costs above contract value are legitimate (overrun), not clamped.
        assert_eq!(percent_of(dec!(150), dec!(100)), Some(dec!(150.00)));
    }
}
