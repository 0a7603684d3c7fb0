//! Escalation and contract-year resolution tests
//!
//! The load-bearing rounding rule: escalation keeps hundredth-of-a-cent
//! precision so the CWT/mileage multipliers see the sub-cent part, and the
//! total rounds to a whole cent exactly once at the end.

use chrono::NaiveDate;
use move_rate_engine::escalation::{
    escalate_price, escalate_price_for_contract_year, is_peak_period, round_to_precision,
};
use move_rate_engine::models::{Contract, ContractYear};
use move_rate_engine::{EngineConfig, InMemoryRateRepository, RateRepository};
use proptest::prelude::*;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn repo_with_years() -> (InMemoryRateRepository, Uuid) {
    let mut repo = InMemoryRateRepository::new();
    let contract_id = Uuid::new_v4();
    repo.add_contract(Contract {
        id: contract_id,
        code: "TEST".to_string(),
    });
    repo.add_contract_year(ContractYear {
        id: Uuid::new_v4(),
        contract_id,
        name: "Base Period Year 1".to_string(),
        start_date: date(2020, 1, 1),
        end_date: date(2020, 12, 31),
        escalation: 1.0407,
        escalation_compounded: 1.0407,
    });
    repo.add_contract_year(ContractYear {
        id: Uuid::new_v4(),
        contract_id,
        name: "Base Period Year 2".to_string(),
        start_date: date(2021, 1, 1),
        end_date: date(2021, 12, 31),
        escalation: 1.02,
        escalation_compounded: 1.06151,
    });
    (repo, contract_id)
}

#[test]
fn test_escalation_fixture() {
    // 146 cents at 1.0407 over 36 CWT must come out to 5470 cents
    let escalated = escalate_price(146.0, 1.0407);
    assert_eq!(escalated, 151.94);
    assert_eq!((escalated * 36.0).round() as i64, 5470);
}

#[test]
fn test_contract_year_window_selection() {
    let (repo, contract_id) = repo_with_years();

    let (escalated, year) =
        escalate_price_for_contract_year(&repo, contract_id, date(2020, 6, 5), 100.0).unwrap();
    assert_eq!(year.name, "Base Period Year 1");
    assert_eq!(escalated, 104.07);

    let (escalated, year) =
        escalate_price_for_contract_year(&repo, contract_id, date(2021, 6, 5), 100.0).unwrap();
    assert_eq!(year.name, "Base Period Year 2");
    assert_eq!(escalated, 106.15);
}

#[test]
fn test_contract_year_windows_are_inclusive() {
    let (repo, contract_id) = repo_with_years();

    let year = repo.fetch_contract_year(contract_id, date(2020, 1, 1)).unwrap();
    assert_eq!(year.name, "Base Period Year 1");
    let year = repo.fetch_contract_year(contract_id, date(2020, 12, 31)).unwrap();
    assert_eq!(year.name, "Base Period Year 1");
}

#[test]
fn test_contract_year_miss_names_the_lookup() {
    let (repo, contract_id) = repo_with_years();

    let err = escalate_price_for_contract_year(&repo, contract_id, date(2030, 6, 5), 100.0)
        .unwrap_err();
    assert!(err.to_string().contains("could not lookup contract year"));
    assert!(err.to_string().contains("contract year"));
}

#[test]
fn test_peak_window_boundaries() {
    let cfg = EngineConfig::default();
    assert!(!is_peak_period(date(2020, 5, 14), &cfg));
    assert!(is_peak_period(date(2020, 5, 15), &cfg));
    assert!(is_peak_period(date(2020, 9, 30), &cfg));
    assert!(!is_peak_period(date(2020, 10, 1), &cfg));
}

proptest! {
    #[test]
    fn prop_escalation_with_identity_factor_is_identity(cents in 0i64..10_000_000) {
        let base = cents as f64;
        prop_assert_eq!(escalate_price(base, 1.0), base);
    }

    #[test]
    fn prop_escalated_price_has_at_most_two_decimals(
        cents in 0i64..1_000_000,
        escalation in 1.0f64..1.5,
    ) {
        let escalated = escalate_price(cents as f64, escalation);
        let scaled = escalated * 100.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn prop_round_to_precision_is_idempotent(
        value in -1_000_000.0f64..1_000_000.0,
        precision in 0i32..6,
    ) {
        let once = round_to_precision(value, precision);
        let twice = round_to_precision(once, precision);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_peak_period_is_year_independent(
        month in 1u32..=12,
        day in 1u32..=28,
        year_a in 2020i32..2035,
        year_b in 2020i32..2035,
    ) {
        let cfg = EngineConfig::default();
        prop_assert_eq!(
            is_peak_period(date(year_a, month, day), &cfg),
            is_peak_period(date(year_b, month, day), &cfg)
        );
    }
}
