//! Parameter bag extraction tests
//!
//! Extraction failures must name the parameter and fire in the pricer's
//! fixed extraction order, before any validation or rate lookup.

use move_rate_engine::params::{names, ParamBag, ParamType};
use move_rate_engine::pricers::price_service_item;
use move_rate_engine::{
    Cents, CubicFeet, EngineConfig, InMemoryRateRepository, Market, PricingError, ServiceCode,
};

#[test]
fn test_missing_param_names_the_key() {
    let bag = ParamBag::new();
    let err = bag.string_param(names::CONTRACT_CODE).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not find param with key ContractCode"
    );
}

#[test]
fn test_type_mismatch_reports_declared_and_required() {
    let bag = ParamBag::new().with(names::WEIGHT_BILLED, ParamType::String, "4025");
    let err = bag.weight_param(names::WEIGHT_BILLED).unwrap_err();
    assert!(matches!(err, PricingError::ParamTypeMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "param WeightBilled is declared as type STRING, expected INTEGER"
    );
}

#[test]
fn test_unparseable_value_reports_the_param() {
    let bag = ParamBag::new().with(names::WEIGHT_BILLED, ParamType::Integer, "heavy");
    let err = bag.weight_param(names::WEIGHT_BILLED).unwrap_err();
    assert!(matches!(err, PricingError::ParamParse { .. }));
    assert!(err.to_string().contains("WeightBilled"));
}

#[test]
fn test_date_format_is_iso() {
    let bag = ParamBag::new().with(names::REFERENCE_DATE, ParamType::Date, "03/11/2020");
    assert!(bag.date_param(names::REFERENCE_DATE).is_err());

    let bag = ParamBag::new().with(names::REFERENCE_DATE, ParamType::Date, "2020-03-11");
    let date = bag.date_param(names::REFERENCE_DATE).unwrap();
    assert_eq!(date.to_string(), "2020-03-11");
}

#[test]
fn test_timestamp_param_accepts_rfc3339() {
    let bag = ParamBag::new().with(
        names::MTO_AVAILABLE_TO_PRIME_AT,
        ParamType::Timestamp,
        "2020-06-05T10:00:00Z",
    );
    let ts = bag.timestamp_param(names::MTO_AVAILABLE_TO_PRIME_AT).unwrap();
    assert_eq!(ts.date().to_string(), "2020-06-05");
}

#[test]
fn test_boolean_param_accepts_both_capitalizations() {
    for value in ["true", "True"] {
        let bag = ParamBag::new().with(names::IS_PPM, ParamType::Boolean, value);
        assert!(bag.boolean_param(names::IS_PPM).unwrap());
    }
    let bag = ParamBag::new().with(names::IS_PPM, ParamType::Boolean, "yes");
    assert!(bag.boolean_param(names::IS_PPM).is_err());
}

#[test]
fn test_market_param_parses_codes() {
    let bag = ParamBag::new()
        .with(names::MARKET_ORIGIN, ParamType::String, "O")
        .with(names::MARKET_DEST, ParamType::String, "C");
    assert_eq!(bag.market_param(names::MARKET_ORIGIN).unwrap(), Market::Oconus);
    assert_eq!(bag.market_param(names::MARKET_DEST).unwrap(), Market::Conus);

    let bag = ParamBag::new().with(names::MARKET_ORIGIN, ParamType::String, "X");
    assert!(bag.market_param(names::MARKET_ORIGIN).is_err());
}

#[test]
fn test_cubic_feet_param_truncates_on_extraction() {
    let bag = ParamBag::new().with(names::CUBIC_FEET_BILLED, ParamType::Decimal, "10.009");
    assert_eq!(
        bag.cubic_feet_param(names::CUBIC_FEET_BILLED).unwrap(),
        CubicFeet(10.00)
    );
}

#[test]
fn test_optional_params_absent_and_present() {
    let bag = ParamBag::new();
    assert_eq!(bag.optional_boolean_param(names::IS_PPM).unwrap(), None);
    assert_eq!(
        bag.optional_cents_param(names::STANDALONE_CRATE_CAP).unwrap(),
        None
    );

    let bag = ParamBag::new()
        .with(names::IS_PPM, ParamType::Boolean, "False")
        .with(names::STANDALONE_CRATE_CAP, ParamType::Integer, "20000");
    assert_eq!(bag.optional_boolean_param(names::IS_PPM).unwrap(), Some(false));
    assert_eq!(
        bag.optional_cents_param(names::STANDALONE_CRATE_CAP).unwrap(),
        Some(Cents(20_000))
    );

    // present but malformed still fails
    let bag = ParamBag::new().with(names::IS_PPM, ParamType::Boolean, "maybe");
    assert!(bag.optional_boolean_param(names::IS_PPM).is_err());
}

#[test]
fn test_extraction_order_first_missing_param_wins() {
    // DLH extracts ContractCode, ReferenceDate, DistanceZip, WeightBilled,
    // ServiceAreaOrigin in that order; with everything absent the contract
    // code is reported first
    let repo = InMemoryRateRepository::new();
    let err = price_service_item(
        &repo,
        &EngineConfig::default(),
        ServiceCode::DLH,
        &ParamBag::new(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not find param with key ContractCode"
    );

    let params = ParamBag::new().with(names::CONTRACT_CODE, ParamType::String, "TEST");
    let err =
        price_service_item(&repo, &EngineConfig::default(), ServiceCode::DLH, &params).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not find param with key ReferenceDate"
    );
}

#[test]
fn test_extraction_happens_before_validation() {
    // the weight param is malformed and the contract code is empty; the
    // parse failure fires first because extraction precedes validation
    let repo = InMemoryRateRepository::new();
    let params = ParamBag::new()
        .with(names::CONTRACT_CODE, ParamType::String, "")
        .with(names::REFERENCE_DATE, ParamType::Date, "2020-03-11")
        .with(names::DISTANCE_ZIP, ParamType::Integer, "1200")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "not-a-number")
        .with(names::SERVICE_AREA_ORIGIN, ParamType::String, "004");

    let err =
        price_service_item(&repo, &EngineConfig::default(), ServiceCode::DLH, &params).unwrap_err();
    assert!(matches!(err, PricingError::ParamParse { .. }));
}
