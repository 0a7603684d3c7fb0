//! Unit type conversion tests
//!
//! Property coverage for the conversions every formula leans on: the
//! millicent/cent boundary rounds exactly once, hundredweight scaling is
//! linear, and billed cubic feet truncate instead of rounding.

use move_rate_engine::{Cents, CubicFeet, Miles, Millicents, Pound};
use proptest::prelude::*;

#[test]
fn test_millicents_to_cents_rounds_half_away_from_zero() {
    assert_eq!(Millicents(1_499).to_cents(), Cents(1));
    assert_eq!(Millicents(1_500).to_cents(), Cents(2));
    assert_eq!(Millicents(-1_500).to_cents(), Cents(-2));
}

#[test]
fn test_pound_to_cwt() {
    assert_eq!(Pound(500).to_cwt_f64(), 5.0);
    assert_eq!(Pound(4025).to_cwt_f64(), 40.25);
    assert_eq!(Pound(0).to_cwt_f64(), 0.0);
}

#[test]
fn test_cents_display_and_dollars() {
    assert_eq!(Cents(5470).to_string(), "5470");
    assert_eq!(Cents(5470).to_dollar_f64(), 54.70);
    assert_eq!(Cents(-721).to_dollar_f64(), -7.21);
}

#[test]
fn test_cubic_feet_truncates_not_rounds() {
    assert_eq!(CubicFeet(10.005).truncated(), CubicFeet(10.00));
    assert_eq!(CubicFeet(10.009).truncated(), CubicFeet(10.00));
    assert_eq!(CubicFeet(3.999).truncated(), CubicFeet(3.99));
}

#[test]
fn test_miles_ordering() {
    assert!(Miles(50) <= Miles(50));
    assert!(Miles(51) > Miles(50));
}

proptest! {
    #[test]
    fn prop_millicents_to_cents_error_is_at_most_half_a_cent(raw in -1_000_000_000i64..1_000_000_000) {
        let cents = Millicents(raw).to_cents();
        let back = cents.0 * 1000;
        prop_assert!((back - raw).abs() <= 500);
    }

    #[test]
    fn prop_cwt_scaling_is_linear(weight in 0i32..100_000) {
        let cwt = Pound(weight).to_cwt_f64();
        prop_assert_eq!(cwt * 100.0, weight as f64);
    }

    #[test]
    fn prop_truncation_never_increases_volume(volume in 0.0f64..100_000.0) {
        let truncated = CubicFeet(volume).truncated();
        prop_assert!(truncated.f64() <= volume);
        prop_assert!(volume - truncated.f64() < 0.01);
    }

    #[test]
    fn prop_cents_from_f64_of_whole_values_is_identity(cents in -1_000_000i64..1_000_000) {
        prop_assert_eq!(Cents::from_f64(cents as f64), Cents(cents));
    }
}
