//! Fuel surcharge (FSC) formulas
//!
//! The surcharge is a signed differential against a fixed baseline diesel
//! price: an EIA price below the baseline produces a negative charge
//! (a credit). No escalation or contract-year resolution applies.
//!
//! `diff_cents = (eia - baseline) / 1000`
//! `multiplier = weight_based_distance_multiplier * distance`
//! `total = round(multiplier * diff_cents * 100)`

use crate::config::EngineConfig;
use crate::display::{format_float, DisplayParam, DisplayParamKey, DisplayParams};
use crate::error::{require_nonzero, PricingError};
use crate::formulas::domestic::check_minimum_weight;
use crate::units::{Cents, Miles, Millicents, Pound};

fn fuel_surcharge(
    config: &EngineConfig,
    distance: Miles,
    weight_based_distance_multiplier: f64,
    eia_fuel_price: Millicents,
) -> (Cents, DisplayParams) {
    let price_difference_cents =
        (eia_fuel_price - config.base_diesel_fuel_price).f64() / 1000.0;
    let multiplier = weight_based_distance_multiplier * distance.f64();
    let total = Cents::from_f64(multiplier * price_difference_cents * 100.0);

    let display_params = vec![
        DisplayParam::new(
            DisplayParamKey::FSCPriceDifferenceInCents,
            format_float(price_difference_cents, 1),
        ),
        DisplayParam::new(DisplayParamKey::FSCMultiplier, format_float(multiplier, 7)),
    ];
    (total, display_params)
}

/// Domestic fuel surcharge (FSC, DOSFSC, DDSFSC)
///
/// PPM shipments skip the weight floor, and a zero distance on a PPM
/// prices to zero instead of failing validation.
pub fn price_fuel_surcharge(
    config: &EngineConfig,
    distance: Miles,
    weight: Pound,
    weight_based_distance_multiplier: f64,
    eia_fuel_price: Millicents,
    is_ppm: bool,
) -> Result<(Cents, DisplayParams), PricingError> {
    if !is_ppm {
        check_minimum_weight(weight, config.min_domestic_weight)?;
    }
    if distance.0 <= 0 && !is_ppm {
        return Err(PricingError::Validation(
            "Distance must be greater than 0".to_string(),
        ));
    }
    require_nonzero(
        "FSCWeightBasedDistanceMultiplier",
        weight_based_distance_multiplier,
    )?;
    require_nonzero("EIAFuelPrice", eia_fuel_price.f64())?;

    let billed_distance = if distance.0 < 0 { Miles(0) } else { distance };
    Ok(fuel_surcharge(
        config,
        billed_distance,
        weight_based_distance_multiplier,
        eia_fuel_price,
    ))
}

/// International SIT fuel surcharge (IOSFSC, IDSFSC)
///
/// Zero distance is valid here: an OCONUS leg reports no drivable
/// distance and the surcharge prices to zero.
pub fn price_intl_fuel_surcharge_sit(
    config: &EngineConfig,
    distance: Miles,
    weight: Pound,
    weight_based_distance_multiplier: f64,
    eia_fuel_price: Millicents,
) -> Result<(Cents, DisplayParams), PricingError> {
    if distance.0 < 0 {
        return Err(PricingError::Validation(
            "Distance cannot be less than 0".to_string(),
        ));
    }
    check_minimum_weight(weight, config.min_international_weight)?;
    require_nonzero(
        "FSCWeightBasedDistanceMultiplier",
        weight_based_distance_multiplier,
    )?;
    require_nonzero("EIAFuelPrice", eia_fuel_price.f64())?;

    Ok(fuel_surcharge(
        config,
        distance,
        weight_based_distance_multiplier,
        eia_fuel_price,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surcharge_above_baseline() {
        let cfg = EngineConfig::default();
        let (total, params) =
            price_fuel_surcharge(&cfg, Miles(2276), Pound(4025), 0.000417, Millicents(281_400), false)
                .unwrap();
        assert_eq!(total, Cents(2980));
        assert_eq!(params[0].value, "31.4");
        assert_eq!(params[1].value, "0.9490692");
    }

    #[test]
    fn test_surcharge_below_baseline_is_a_credit() {
        let cfg = EngineConfig::default();
        let (total, params) =
            price_fuel_surcharge(&cfg, Miles(2276), Pound(4025), 0.000417, Millicents(242_400), false)
                .unwrap();
        assert_eq!(total, Cents(-721));
        assert_eq!(params[0].value, "-7.6");
    }

    #[test]
    fn test_ppm_zero_distance_prices_to_zero() {
        let cfg = EngineConfig::default();
        let (total, _) =
            price_fuel_surcharge(&cfg, Miles(0), Pound(250), 0.000417, Millicents(281_400), true)
                .unwrap();
        assert_eq!(total, Cents(0));
    }

    #[test]
    fn test_zero_distance_rejected_when_not_ppm() {
        let cfg = EngineConfig::default();
        let err =
            price_fuel_surcharge(&cfg, Miles(0), Pound(4025), 0.000417, Millicents(281_400), false)
                .unwrap_err();
        assert_eq!(err.to_string(), "Distance must be greater than 0");
    }

    #[test]
    fn test_intl_negative_distance_rejected_but_zero_allowed() {
        let cfg = EngineConfig::default();
        let err = price_intl_fuel_surcharge_sit(
            &cfg,
            Miles(-3),
            Pound(1000),
            0.000417,
            Millicents(281_400),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Distance cannot be less than 0");

        let (total, _) = price_intl_fuel_surcharge_sit(
            &cfg,
            Miles(0),
            Pound(1000),
            0.000417,
            Millicents(281_400),
        )
        .unwrap();
        assert_eq!(total, Cents(0));
    }
}
