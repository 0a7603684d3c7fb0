//! Task-order fee pricers (MS, CS)
//!
//! Management and counseling services bill a flat fee negotiated per
//! contract year. No escalation, weight, or distance applies; the fee row
//! is keyed by contract year and service.

use crate::config::EngineConfig;
use crate::display::{format_cents, DisplayParam, DisplayParamKey};
use crate::error::{require_nonempty, PricingError, ResultContext};
use crate::models::ServiceCode;
use crate::params::{names, ParamBag};
use crate::pricers::PriceResult;
use crate::repository::RateRepository;
use chrono::NaiveDate;

pub struct TaskOrderFeePricer {
    code: ServiceCode,
}

impl TaskOrderFeePricer {
    pub fn new(code: ServiceCode) -> Self {
        Self { code }
    }

    pub fn price(
        &self,
        repo: &dyn RateRepository,
        _config: &EngineConfig,
        contract_code: &str,
        available_to_prime_date: NaiveDate,
    ) -> Result<PriceResult, PricingError> {
        if self.code != ServiceCode::MS && self.code != ServiceCode::CS {
            return Err(PricingError::UnsupportedCode(self.code.to_string()));
        }
        require_nonempty("ContractCode", contract_code)?;

        let contract = repo.fetch_contract_by_code(contract_code)?;
        let contract_year = repo
            .fetch_contract_year(contract.id, available_to_prime_date)
            .context("could not lookup contract year")?;
        let service = repo.fetch_service_by_code(self.code)?;
        let fee = repo
            .fetch_task_order_fee(contract_year.id, service.id)
            .context("could not lookup task order fee")?;

        let display_params = vec![
            DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
            DisplayParam::new(
                DisplayParamKey::PriceRateOrFactor,
                format_cents(fee.price),
            ),
        ];
        Ok(PriceResult::new(fee.price, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let available_at = params.timestamp_param(names::MTO_AVAILABLE_TO_PRIME_AT)?;

        self.price(repo, config, &contract_code, available_at.date())
    }
}
