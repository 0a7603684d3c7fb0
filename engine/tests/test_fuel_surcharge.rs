//! Fuel surcharge pricing tests (FSC, DOSFSC, DDSFSC)
//!
//! The surcharge is signed against the fixed 2.50 $/gal baseline: EIA
//! prices above it bill the prime, prices below it credit the government.

use move_rate_engine::params::{names, ParamBag, ParamType};
use move_rate_engine::pricers::price_service_item;
use move_rate_engine::{Cents, EngineConfig, InMemoryRateRepository, ServiceCode};

fn fsc_params(eia_price: &str) -> ParamBag {
    ParamBag::new()
        .with(names::ACTUAL_PICKUP_DATE, ParamType::Date, "2020-06-05")
        .with(names::DISTANCE_ZIP, ParamType::Integer, "2276")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "4025")
        .with(
            names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
            ParamType::Decimal,
            "0.000417",
        )
        .with(names::EIA_FUEL_PRICE, ParamType::Integer, eia_price)
}

#[test]
fn test_surcharge_above_baseline() {
    let repo = InMemoryRateRepository::new();
    let result = price_service_item(
        &repo,
        &EngineConfig::default(),
        ServiceCode::FSC,
        &fsc_params("281400"),
    )
    .unwrap();

    // (281400 - 250000) / 1000 = 31.4; 0.000417 * 2276 = 0.9490692
    assert_eq!(result.total, Cents(2980));
    let diff = result
        .display_params
        .iter()
        .find(|p| p.key.as_str() == "FSCPriceDifferenceInCents")
        .unwrap();
    assert_eq!(diff.value, "31.4");
    let multiplier = result
        .display_params
        .iter()
        .find(|p| p.key.as_str() == "FSCMultiplier")
        .unwrap();
    assert_eq!(multiplier.value, "0.9490692");
}

#[test]
fn test_surcharge_below_baseline_is_a_credit() {
    let repo = InMemoryRateRepository::new();
    let result = price_service_item(
        &repo,
        &EngineConfig::default(),
        ServiceCode::FSC,
        &fsc_params("242400"),
    )
    .unwrap();

    assert_eq!(result.total, Cents(-721));
    let diff = result
        .display_params
        .iter()
        .find(|p| p.key.as_str() == "FSCPriceDifferenceInCents")
        .unwrap();
    assert_eq!(diff.value, "-7.6");
}

#[test]
fn test_surcharge_requires_positive_distance() {
    let repo = InMemoryRateRepository::new();
    let params = ParamBag::new()
        .with(names::ACTUAL_PICKUP_DATE, ParamType::Date, "2020-06-05")
        .with(names::DISTANCE_ZIP, ParamType::Integer, "0")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "4025")
        .with(
            names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
            ParamType::Decimal,
            "0.000417",
        )
        .with(names::EIA_FUEL_PRICE, ParamType::Integer, "281400");

    let err =
        price_service_item(&repo, &EngineConfig::default(), ServiceCode::FSC, &params).unwrap_err();
    assert_eq!(err.to_string(), "Distance must be greater than 0");
}

#[test]
fn test_ppm_zero_distance_prices_to_zero() {
    let repo = InMemoryRateRepository::new();
    let params = ParamBag::new()
        .with(names::ACTUAL_PICKUP_DATE, ParamType::Date, "2020-06-05")
        .with(names::DISTANCE_ZIP, ParamType::Integer, "0")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "250")
        .with(
            names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
            ParamType::Decimal,
            "0.000417",
        )
        .with(names::EIA_FUEL_PRICE, ParamType::Integer, "281400")
        .with(names::IS_PPM, ParamType::Boolean, "true");

    let result =
        price_service_item(&repo, &EngineConfig::default(), ServiceCode::FSC, &params).unwrap();
    assert_eq!(result.total, Cents(0));
}

#[test]
fn test_surcharge_weight_floor() {
    let repo = InMemoryRateRepository::new();
    let params = ParamBag::new()
        .with(names::ACTUAL_PICKUP_DATE, ParamType::Date, "2020-06-05")
        .with(names::DISTANCE_ZIP, ParamType::Integer, "2276")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "499")
        .with(
            names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
            ParamType::Decimal,
            "0.000417",
        )
        .with(names::EIA_FUEL_PRICE, ParamType::Integer, "281400");

    let err =
        price_service_item(&repo, &EngineConfig::default(), ServiceCode::FSC, &params).unwrap_err();
    assert_eq!(
        err.to_string(),
        "weight of 499 is less than the minimum of 500"
    );
}

#[test]
fn test_surcharge_requires_multiplier_and_fuel_price() {
    let repo = InMemoryRateRepository::new();
    let params = ParamBag::new()
        .with(names::ACTUAL_PICKUP_DATE, ParamType::Date, "2020-06-05")
        .with(names::DISTANCE_ZIP, ParamType::Integer, "2276")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "4025")
        .with(
            names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
            ParamType::Decimal,
            "0",
        )
        .with(names::EIA_FUEL_PRICE, ParamType::Integer, "281400");

    let err =
        price_service_item(&repo, &EngineConfig::default(), ServiceCode::FSC, &params).unwrap_err();
    assert_eq!(
        err.to_string(),
        "FSCWeightBasedDistanceMultiplier is required"
    );
}

// ============================================================================
// SIT leg fuel surcharge (DOSFSC, DDSFSC)
// ============================================================================

#[test]
fn test_origin_sit_surcharge_uses_origin_sit_distance() {
    let repo = InMemoryRateRepository::new();
    let params = ParamBag::new()
        .with(names::ACTUAL_PICKUP_DATE, ParamType::Date, "2020-06-05")
        .with(names::DISTANCE_ZIP_SIT_ORIGIN, ParamType::Integer, "2276")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "4025")
        .with(
            names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
            ParamType::Decimal,
            "0.000417",
        )
        .with(names::EIA_FUEL_PRICE, ParamType::Integer, "281400");

    let result =
        price_service_item(&repo, &EngineConfig::default(), ServiceCode::DOSFSC, &params).unwrap();
    assert_eq!(result.total, Cents(2980));
}

#[test]
fn test_dest_sit_surcharge_missing_distance_param() {
    let repo = InMemoryRateRepository::new();
    let params = ParamBag::new()
        .with(names::ACTUAL_PICKUP_DATE, ParamType::Date, "2020-06-05")
        .with(names::DISTANCE_ZIP_SIT_ORIGIN, ParamType::Integer, "2276")
        .with(names::WEIGHT_BILLED, ParamType::Integer, "4025")
        .with(
            names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
            ParamType::Decimal,
            "0.000417",
        )
        .with(names::EIA_FUEL_PRICE, ParamType::Integer, "281400");

    // DDSFSC reads the destination SIT distance, which is absent here
    let err = price_service_item(&repo, &EngineConfig::default(), ServiceCode::DDSFSC, &params)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not find param with key DistanceZipSITDest"
    );
}
