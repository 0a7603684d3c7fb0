//! Pricers for domestic packing, crating, and shuttling

use crate::config::EngineConfig;
use crate::error::PricingError;
use crate::formulas::domestic::{
    price_domestic_crating, price_domestic_pack_unpack, price_domestic_shuttling,
};
use crate::models::ServiceCode;
use crate::params::{names, ParamBag};
use crate::pricers::PriceResult;
use crate::repository::RateRepository;
use crate::units::{Cents, CubicFeet, Pound};
use chrono::NaiveDate;

/// Packing and unpacking (DPK, DNPK, DUPK): flat per-CWT schedule rate
///
/// Pack codes bill the origin schedule, unpack the destination one. NTS
/// packing (DNPK) reuses the DPK rate with a market factor and never
/// carries the PPM exemption.
pub struct DomesticPackUnpackPricer {
    code: ServiceCode,
}

impl DomesticPackUnpackPricer {
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
        services_schedule: i32,
        is_ppm: bool,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_pack_unpack(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            services_schedule,
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
        let schedule_param = if self.code == ServiceCode::DUPK {
            names::SERVICES_SCHEDULE_DEST
        } else {
            names::SERVICES_SCHEDULE_ORIGIN
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let services_schedule = params.schedule_param(schedule_param)?;
        let is_ppm = if self.code == ServiceCode::DNPK {
            false
        } else {
            params.optional_boolean_param(names::IS_PPM)?.unwrap_or(false)
        };

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            services_schedule,
            is_ppm,
        )
    }
}

/// Crating and uncrating (DCRT, DUCRT): per cubic foot with a 4 cu ft floor
pub struct DomesticCratingPricer {
    code: ServiceCode,
}

impl DomesticCratingPricer {
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
        billed_cubic_feet: CubicFeet,
        services_schedule: i32,
        standalone_crate: bool,
        standalone_crate_cap: Option<Cents>,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_crating(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            billed_cubic_feet,
            services_schedule,
            standalone_crate,
            standalone_crate_cap,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let schedule_param = if self.code == ServiceCode::DUCRT {
            names::SERVICES_SCHEDULE_DEST
        } else {
            names::SERVICES_SCHEDULE_ORIGIN
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let billed_cubic_feet = params.cubic_feet_param(names::CUBIC_FEET_BILLED)?;
        let services_schedule = params.schedule_param(schedule_param)?;
        let standalone_crate = params
            .optional_boolean_param(names::STANDALONE_CRATE)?
            .unwrap_or(false);
        let standalone_crate_cap = params.optional_cents_param(names::STANDALONE_CRATE_CAP)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            billed_cubic_feet,
            services_schedule,
            standalone_crate,
            standalone_crate_cap,
        )
    }
}

/// Shuttling (DOSHUT, DDSHUT): flat per-CWT accessorial rate
pub struct DomesticShuttlingPricer {
    code: ServiceCode,
}

impl DomesticShuttlingPricer {
    pub fn new(code: ServiceCode) -> Self {
        Self { code }
    }

    pub fn price(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        contract_code: &str,
        reference_date: NaiveDate,
        weight: Pound,
        services_schedule: i32,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_domestic_shuttling(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            services_schedule,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let schedule_param = if self.code == ServiceCode::DDSHUT {
            names::SERVICES_SCHEDULE_DEST
        } else {
            names::SERVICES_SCHEDULE_ORIGIN
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let services_schedule = params.schedule_param(schedule_param)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            services_schedule,
        )
    }
}
