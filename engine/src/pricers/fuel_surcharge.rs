//! Fuel surcharge pricer (FSC)

use crate::config::EngineConfig;
use crate::error::PricingError;
use crate::formulas::fuel::price_fuel_surcharge;
use crate::params::{names, ParamBag};
use crate::pricers::PriceResult;
use crate::repository::RateRepository;
use crate::units::{Miles, Millicents, Pound};

/// Shipment fuel surcharge, signed against the baseline diesel price
pub struct FuelSurchargePricer;

impl FuelSurchargePricer {
    pub fn price(
        &self,
        config: &EngineConfig,
        distance: Miles,
        weight: Pound,
        weight_based_distance_multiplier: f64,
        eia_fuel_price: Millicents,
        is_ppm: bool,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_fuel_surcharge(
            config,
            distance,
            weight,
            weight_based_distance_multiplier,
            eia_fuel_price,
            is_ppm,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        _repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let _actual_pickup_date = params.date_param(names::ACTUAL_PICKUP_DATE)?;
        let distance = params.miles_param(names::DISTANCE_ZIP)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let multiplier = params.decimal_param(names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER)?;
        let eia_fuel_price = params.millicents_param(names::EIA_FUEL_PRICE)?;
        let is_ppm = params.optional_boolean_param(names::IS_PPM)?.unwrap_or(false);

        self.price(config, distance, weight, multiplier, eia_fuel_price, is_ppm)
    }
}
