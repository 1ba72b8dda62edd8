//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for money and price breakdowns
//! that give more meaningful error messages than standard assertions.

use core_kernel::{Currency, Money};
use domain_pricing::PriceBreakdown;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a value is exactly the given number of pounds
pub fn assert_gbp(actual: &Money, pounds: Decimal) {
    assert_eq!(
        actual.currency(),
        Currency::GBP,
        "Expected GBP, got {}",
        actual.currency()
    );
    assert_eq!(
        actual.amount(),
        pounds,
        "Expected £{}, got {}",
        pounds,
        actual
    );
}

/// Asserts that a Money value is a whole number of pounds
pub fn assert_whole_pounds(money: &Money) {
    assert!(
        money.is_whole(),
        "Expected whole pounds, got {}",
        money
    );
}

/// Asserts the arithmetic that ties a breakdown together
///
/// - total is the adjusted base plus add-ons
/// - monthly is a whole number within 50p of total / 12
/// - no component is negative
pub fn assert_breakdown_consistent(breakdown: &PriceBreakdown) {
    assert_eq!(
        breakdown.total_price,
        breakdown.adjusted_base_price + breakdown.add_on_total,
        "Total {} is not adjusted base {} plus add-ons {}",
        breakdown.total_price,
        breakdown.adjusted_base_price,
        breakdown.add_on_total
    );

    assert_whole_pounds(&breakdown.monthly_price);
    let exact = breakdown.total_price.amount() / dec!(12);
    assert!(
        (breakdown.monthly_price.amount() - exact).abs() <= dec!(0.5),
        "Monthly {} is not total {} over 12 payments",
        breakdown.monthly_price,
        breakdown.total_price
    );

    for (name, money) in [
        ("base", &breakdown.base_price),
        ("adjusted base", &breakdown.adjusted_base_price),
        ("add-ons", &breakdown.add_on_total),
    ] {
        assert!(!money.is_negative(), "{} price is negative: {}", name, money);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_money_approx_eq_within_tolerance() {
        assert_money_approx_eq(
            &Money::gbp(dec!(100.004)),
            &Money::gbp(dec!(100.00)),
            dec!(0.01),
        );
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_assert_money_approx_eq_outside_tolerance() {
        assert_money_approx_eq(
            &Money::gbp(dec!(100.02)),
            &Money::gbp(dec!(100.00)),
            dec!(0.01),
        );
    }

    #[test]
    #[should_panic(expected = "Expected whole pounds")]
    fn test_assert_whole_pounds_rejects_pence() {
        assert_whole_pounds(&Money::gbp(dec!(46.07)));
    }

    #[test]
    fn test_assert_gbp() {
        assert_gbp(&Money::gbp(dec!(877.00)), dec!(877));
    }
}
