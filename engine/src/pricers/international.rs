//! Pricers for international services
//!
//! Origin-side codes read the origin market/distance parameters and
//! destination-side codes the destination ones; otherwise each pricer is a
//! thin extraction layer over its formula.

use crate::config::EngineConfig;
use crate::error::PricingError;
use crate::formulas::fuel::price_intl_fuel_surcharge_sit;
use crate::formulas::intl::{
    price_intl_additional_day_sit, price_intl_crating, price_intl_first_day_sit,
    price_intl_nts_pack, price_intl_pack_unpack, price_intl_pickup_delivery_sit,
    price_intl_shuttling,
};
use crate::models::{Market, ServiceCode};
use crate::params::{names, ParamBag};
use crate::pricers::PriceResult;
use crate::repository::RateRepository;
use crate::units::{Cents, CubicFeet, Miles, Millicents, Pound};
use chrono::NaiveDate;

/// International shuttling (IOSHUT, IDSHUT)
pub struct IntlShuttlingPricer {
    code: ServiceCode,
}

impl IntlShuttlingPricer {
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
        market: Market,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_shuttling(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            market,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let market_param = if self.code == ServiceCode::IDSHUT {
            names::MARKET_DEST
        } else {
            names::MARKET_ORIGIN
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let market = params.market_param(market_param)?;

        self.price(repo, config, &contract_code, reference_date, weight, market)
    }
}

/// International packing/unpacking (IHPK, IHUPK, IUBPK, IUBUPK)
pub struct IntlPackUnpackPricer {
    code: ServiceCode,
}

impl IntlPackUnpackPricer {
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
        per_unit_cents: Cents,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_pack_unpack(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            per_unit_cents,
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
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let per_unit_cents = params.cents_param(names::PER_UNIT_CENTS)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            per_unit_cents,
        )
    }
}

/// International NTS packing (INPK): IHPK rate times the market factor
pub struct IntlNtsPackPricer;

impl IntlNtsPackPricer {
    #[allow(clippy::too_many_arguments)]
    pub fn price(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        contract_code: &str,
        reference_date: NaiveDate,
        weight: Pound,
        per_unit_cents: Cents,
        market: Market,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_nts_pack(
            repo,
            config,
            contract_code,
            reference_date,
            weight,
            per_unit_cents,
            market,
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
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let per_unit_cents = params.cents_param(names::PER_UNIT_CENTS)?;
        let market = params.market_param(names::MARKET_ORIGIN)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            per_unit_cents,
            market,
        )
    }
}

/// International first-day SIT (IOFSIT, IDFSIT)
pub struct IntlFirstDaySitPricer {
    code: ServiceCode,
}

impl IntlFirstDaySitPricer {
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
        per_unit_cents: Cents,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_first_day_sit(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            per_unit_cents,
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
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let per_unit_cents = params.cents_param(names::PER_UNIT_CENTS)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            per_unit_cents,
        )
    }
}

/// International additional-day SIT (IOASIT, IDASIT)
pub struct IntlAdditionalDaySitPricer {
    code: ServiceCode,
}

impl IntlAdditionalDaySitPricer {
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
        number_of_days: i32,
        weight: Pound,
        per_unit_cents: Cents,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_additional_day_sit(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            number_of_days,
            weight,
            per_unit_cents,
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
        let number_of_days = params.schedule_param(names::NUMBER_DAYS_SIT)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let per_unit_cents = params.cents_param(names::PER_UNIT_CENTS)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            number_of_days,
            weight,
            per_unit_cents,
        )
    }
}

/// International SIT pickup/delivery (IOPSIT, IDDSIT)
pub struct IntlPickupDeliverySitPricer {
    code: ServiceCode,
}

impl IntlPickupDeliverySitPricer {
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
        per_unit_cents: Cents,
        distance: Miles,
        market: Market,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_pickup_delivery_sit(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            weight,
            per_unit_cents,
            distance,
            market,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let (distance_param, market_param) = if self.code == ServiceCode::IDDSIT {
            (names::DISTANCE_ZIP_SIT_DEST, names::MARKET_DEST)
        } else {
            (names::DISTANCE_ZIP_SIT_ORIGIN, names::MARKET_ORIGIN)
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let per_unit_cents = params.cents_param(names::PER_UNIT_CENTS)?;
        let distance = params.miles_param(distance_param)?;
        let market = params.market_param(market_param)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            weight,
            per_unit_cents,
            distance,
            market,
        )
    }
}

/// International crating/uncrating (ICRT, IUCRT)
pub struct IntlCratingPricer {
    code: ServiceCode,
}

impl IntlCratingPricer {
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
        standalone_crate: bool,
        standalone_crate_cap: Option<Cents>,
        external_crate: bool,
        market: Market,
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_crating(
            repo,
            config,
            self.code,
            contract_code,
            reference_date,
            billed_cubic_feet,
            standalone_crate,
            standalone_crate_cap,
            external_crate,
            market,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let market_param = if self.code == ServiceCode::IUCRT {
            names::MARKET_DEST
        } else {
            names::MARKET_ORIGIN
        };
        let contract_code = params.string_param(names::CONTRACT_CODE)?;
        let reference_date = params.date_param(names::REFERENCE_DATE)?;
        let billed_cubic_feet = params.cubic_feet_param(names::CUBIC_FEET_BILLED)?;
        let standalone_crate = params
            .optional_boolean_param(names::STANDALONE_CRATE)?
            .unwrap_or(false);
        let standalone_crate_cap = params.optional_cents_param(names::STANDALONE_CRATE_CAP)?;
        let external_crate = params
            .optional_boolean_param(names::EXTERNAL_CRATE)?
            .unwrap_or(false);
        let market = params.market_param(market_param)?;

        self.price(
            repo,
            config,
            &contract_code,
            reference_date,
            billed_cubic_feet,
            standalone_crate,
            standalone_crate_cap,
            external_crate,
            market,
        )
    }
}

/// International SIT fuel surcharge (IOSFSC, IDSFSC)
pub struct IntlSitFuelSurchargePricer {
    code: ServiceCode,
}

impl IntlSitFuelSurchargePricer {
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
    ) -> Result<PriceResult, PricingError> {
        let (total, display_params) = price_intl_fuel_surcharge_sit(
            config,
            distance,
            weight,
            weight_based_distance_multiplier,
            eia_fuel_price,
        )?;
        Ok(PriceResult::new(total, display_params))
    }

    pub fn price_using_params(
        &self,
        _repo: &dyn RateRepository,
        config: &EngineConfig,
        params: &ParamBag,
    ) -> Result<PriceResult, PricingError> {
        let distance_param = if self.code == ServiceCode::IDSFSC {
            names::DISTANCE_ZIP_SIT_DEST
        } else {
            names::DISTANCE_ZIP_SIT_ORIGIN
        };
        let _actual_pickup_date = params.date_param(names::ACTUAL_PICKUP_DATE)?;
        let distance = params.miles_param(distance_param)?;
        let weight = params.weight_param(names::WEIGHT_BILLED)?;
        let multiplier = params.decimal_param(names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER)?;
        let eia_fuel_price = params.millicents_param(names::EIA_FUEL_PRICE)?;

        self.price(config, distance, weight, multiplier, eia_fuel_price)
    }
}
