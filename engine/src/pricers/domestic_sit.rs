//! Pricers for domestic storage-in-transit services

use crate::config::EngineConfig;
use crate::error::PricingError;
use crate::formulas::domestic_sit::{
    price_domestic_additional_days_sit, price_domestic_first_day_sit,
    price_domestic_pickup_delivery_sit,
};
use crate::formulas::fuel::price_fuel_surcharge;
use crate::models::ServiceCode;
use crate::params::{names, ParamBag};
use crate::pricers::PriceResult;
use crate::repository::RateRepository;
use crate::units::{Miles, Millicents, Pound};
use chrono::NaiveDate;

/// First-day SIT (DOFSIT, DDFSIT)
pub struct DomesticFirstDaySitPricer {
    code: ServiceCode,
}

impl DomesticFirstDaySitPricer {
    pub fn new(code: ServiceCode) -> Self {
        Self { code }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn price(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        contract_code: &str,
        reference_date: NaiveDate,
        weight: Pound,
        service_area: &str,
        is_ppm: bool,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_first_day_sit(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            service_area,
            is_ppm,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let area_param = if self.code == ServiceCode::DDFSIT {
            names::SERVICE_AREA_DEST
        } else {
            names::SERVICE_AREA_ORIGIN
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let service_area = params.string_param(area_param)?;
        let is_ppm = params.optional_boolean_param(names::IS_PPM)?.unwrap_or(false);

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            &service_area,
            is_ppm,
        )
    }
}

/// Additional-day SIT (DOASIT, DDASIT)
pub struct DomesticAdditionalDaysSitPricer {
    code: ServiceCode,
}

impl DomesticAdditionalDaysSitPricer {
    pub fn new(code: ServiceCode) -> Self {
        Self { code }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn price(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        contract_code: &str,
        reference_date: NaiveDate,
        weight: Pound,
        service_area: &str,
        number_of_days: i32,
        is_ppm: bool,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_additional_days_sit(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            service_area,
            number_of_days,
            is_ppm,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let area_param = if self.code == ServiceCode::DDASIT {
            names::SERVICE_AREA_DEST
        } else {
            names::SERVICE_AREA_ORIGIN
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let service_area = params.string_param(area_param)?;
        let number_of_days = params.schedule_param(names::NUMBER_DAYS_SIT)?;
        let is_ppm = params.optional_boolean_param(names::IS_PPM)?.unwrap_or(false);

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            &service_area,
            number_of_days,
            is_ppm,
        )
    }
}

/// SIT pickup/delivery (DOPSIT, DDDSIT) with ZIP3/distance routing
pub struct DomesticPickupDeliverySitPricer {
    code: ServiceCode,
}

impl DomesticPickupDeliverySitPricer {
    pub fn new(code: ServiceCode) -> Self {
        Self { code }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn price(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        contract_code: &str,
        reference_date: NaiveDate,
        weight: Pound,
        service_area: &str,
        sit_schedule: i32,
        zip_original: &str,
        zip_actual: &str,
        distance: Miles,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_pickup_delivery_sit(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            service_area,
            sit_schedule,
            zip_original,
            zip_actual,
            distance,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        // origin moves between its original and actual SIT addresses;
        // destination moves between the shipment address and the final one
        let (area_param, schedule_param, zip_original_param, zip_actual_param, distance_param) =
            if self.code == ServiceCode::DDDSIT {
                (
                    names::SERVICE_AREA_DEST,
                    names::SIT_SCHEDULE_DEST,
                    names::ZIP_DEST_ADDRESS,
                    names::ZIP_SIT_DEST_FINAL_ADDRESS,
                    names::DISTANCE_ZIP_SIT_DEST,
                )
            } else {
                (
                    names::SERVICE_AREA_ORIGIN,
                    names::SIT_SCHEDULE_ORIGIN,
                    names::ZIP_SIT_ORIGIN_ORIGINAL_ADDRESS,
                    names::ZIP_SIT_ORIGIN_ACTUAL_ADDRESS,
                    names::DISTANCE_ZIP_SIT_ORIGIN,
                )
            };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let service_area = params.string_param(area_param)?;
        let sit_schedule = params.schedule_param(schedule_param)?;
        let zip_original = params.string_param(zip_original_param)?;
        let zip_actual = params.string_param(zip_actual_param)?;
        let distance = params.miles_param(distance_param)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            &service_area,
            sit_schedule,
            &zip_original,
            &zip_actual,
            distance,
        )
    }
}

/// SIT fuel surcharge (DOSFSC, DDSFSC): the FSC formula over the SIT leg
pub struct DomesticSitFuelSurchargePricer {
    code: ServiceCode,
}

impl DomesticSitFuelSurchargePricer {
    pub fn new(code: ServiceCode) -> Self {
        Self { code }
    }

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
        let distance_param = if self.code == ServiceCode::DDSFSC {
            names::DISTANCE_ZIP_SIT_DEST
        } else {
            names::DISTANCE_ZIP_SIT_ORIGIN
        };
        let _actual_pickup_date = params.date_param(names::ACTUAL_PICKUP_DATE)?;
        let distance = params.miles_param(distance_param)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let multiplier = params.decimal_param(names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER)?;
        let eia_fuel_price = params.millicents_param(names::EIA_FUEL_PRICE)?;
        let is_ppm = params.optional_boolean_param(names::IS_PPM)?.unwrap_or(false);

        self.price(config, distance, weight, multiplier, eia_fuel_price, is_ppm)
    }
}
