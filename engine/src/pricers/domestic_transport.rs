//! Pricers for domestic transport services (DLH, DSH, DOP, DDP)

use crate::config::EngineConfig;
use crate::error::PricingError;
use crate::formulas::domestic::{
    price_domestic_linehaul, price_domestic_service_area, price_domestic_shorthaul,
};
use crate::models::ServiceCode;
use crate::params::{names, ParamBag};
use crate::pricers::PriceResult;
use crate::repository::RateRepository;
use crate::units::{Miles, Pound};
use chrono::NaiveDate;

/// Domestic linehaul (DLH): per CWT-mile, bracketed millicent rates
pub struct DomesticLinehaulPricer;

impl DomesticLinehaulPricer {
    #[allow(clippy::too_many_arguments)]
    pub fn price(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        contract_code: &str,
        reference_date: NaiveDate,
        distance: Miles,
        weight: Pound,
        service_area: &str,
        is_ppm: bool,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_linehaul(
            repo,
            config,
            contract_code,
            reference_date,
            distance,
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
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let distance = params.miles_param(names::DISTANCE_ZIP)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let service_area = params.string_param(names::SERVICE_AREA_ORIGIN)?;
        let is_ppm = params.optional_boolean_param(names::IS_PPM)?.unwrap_or(false);

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            distance,
            weight,
            &service_area,
            is_ppm,
        )
    }
}

/// Domestic shorthaul (DSH): per CWT-mile, service-area cent rates
pub struct DomesticShorthaulPricer;

impl DomesticShorthaulPricer {
    #[allow(clippy::too_many_arguments)]
    pub fn price(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        contract_code: &str,
        reference_date: NaiveDate,
        distance: Miles,
        weight: Pound,
        service_area: &str,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_shorthaul(
            repo,
            config,
            contract_code,
            reference_date,
            distance,
            weight,
            service_area,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let distance = params.miles_param(names::DISTANCE_ZIP)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let service_area = params.string_param(names::SERVICE_AREA_ORIGIN)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            distance,
            weight,
            &service_area,
        )
    }
}

/// Origin/destination service-area price (DOP, DDP): flat per-CWT rate
pub struct DomesticServiceAreaPricer {
    code: ServiceCode,
}

impl DomesticServiceAreaPricer {
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
        let (total, display_params) = price_domestic_service_area(
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
        let area_param = if self.code == ServiceCode::DDP {
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
