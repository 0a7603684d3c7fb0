//! International pricing formulas
//!
//! International rates are simpler than domestic ones: most arrive as a
//! flat per-unit cents figure already resolved upstream, so the formulas
//! here escalate, scale by hundredweight or cubic feet, and round. Weight
//! floors split on shipment type: 300 lb for unaccompanied baggage, 500 lb
//! for household goods.

use crate::config::EngineConfig;
use crate::display::{
    format_bool, format_cents, format_escalation, format_float, DisplayParam, DisplayParamKey,
    DisplayParams,
};
use crate::error::{require_nonempty, require_nonzero, PricingError, ResultContext};
use crate::escalation::{escalate_price_for_contract_year, is_peak_period};
use crate::formulas::domestic::check_minimum_weight;
use crate::models::{Market, ServiceCode};
use crate::repository::RateRepository;
use crate::units::{Cents, CubicFeet, Miles, Pound};
use chrono::NaiveDate;

fn international_weight_floor(code: ServiceCode, config: &EngineConfig) -> Pound {
    if code.is_unaccompanied_baggage() {
        config.min_ub_weight
    } else {
        config.min_international_weight
    }
}

/// Per-CWT international shuttling (IOSHUT, IDSHUT), rate keyed by market
pub fn price_intl_shuttling(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    market: Market,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::IOSHUT && code != ServiceCode::IDSHUT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    check_minimum_weight(weight, config.min_international_weight)?;

    let contract = repo.fetch_contract_by_code(contract_code)?;
    let accessorial = repo
        .fetch_international_accessorial_price(contract.id, code, market)
        .context("could not lookup international accessorial price")?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        accessorial.per_unit.f64(),
    )
    .context("could not calculate escalated price")?;

    let total = Cents::from_f64(escalated_price * weight.to_cwt_f64());

    let display_params = vec![
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(accessorial.per_unit),
        ),
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
    ];
    Ok((total, display_params))
}

/// Per-CWT international packing/unpacking (IHPK, IHUPK, IUBPK, IUBUPK)
///
/// The rate arrives as a flat per-unit cents parameter rather than a
/// rate-table row.
pub fn price_intl_pack_unpack(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    per_unit_cents: Cents,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::IHPK
        && code != ServiceCode::IHUPK
        && code != ServiceCode::IUBPK
        && code != ServiceCode::IUBUPK
    {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    check_minimum_weight(weight, international_weight_floor(code, config))?;
    require_nonzero("PerUnitCents", per_unit_cents.f64())?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        per_unit_cents.f64(),
    )
    .context("could not calculate escalated price")?;

    let total = Cents::from_f64(escalated_price * weight.to_cwt_f64());

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(per_unit_cents),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
    ];
    Ok((total, display_params))
}

/// International NTS packing (INPK)
///
/// Two-stage composition: the household-goods pack rate (IHPK per-unit)
/// times a separately fetched market factor, then the usual escalate and
/// CWT scaling.
pub fn price_intl_nts_pack(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    per_unit_cents: Cents,
    market: Market,
) -> Result<(Cents, DisplayParams), PricingError> {
    require_nonempty("ContractCode", contract_code)?;
    check_minimum_weight(weight, config.min_international_weight)?;
    require_nonzero("PerUnitCents", per_unit_cents.f64())?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;
    let factor = repo
        .fetch_market_factor(contract.id, ServiceCode::INPK, market)
        .context("could not fetch NTS packing factor")?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        per_unit_cents.f64(),
    )
    .context("could not calculate escalated price")?;

    // Market factor adjusts the escalated, CWT-scaled HHG pack price
    let total = Cents::from_f64(escalated_price * weight.to_cwt_f64() * factor);

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(per_unit_cents),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
        DisplayParam::new(
            DisplayParamKey::NTSPackingFactor,
            format_float(factor, 2),
        ),
    ];
    Ok((total, display_params))
}

/// International first-day SIT (IOFSIT, IDFSIT)
pub fn price_intl_first_day_sit(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    per_unit_cents: Cents,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::IOFSIT && code != ServiceCode::IDFSIT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    check_minimum_weight(weight, config.min_international_weight)?;
    require_nonzero("PerUnitCents", per_unit_cents.f64())?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        per_unit_cents.f64(),
    )
    .context("could not calculate escalated price")?;

    let total = Cents::from_f64(escalated_price * weight.to_cwt_f64());

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(per_unit_cents),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
    ];
    Ok((total, display_params))
}

/// International additional-day SIT (IOASIT, IDASIT), scaled by days in SIT
pub fn price_intl_additional_day_sit(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    number_of_days: i32,
    weight: Pound,
    per_unit_cents: Cents,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::IOASIT && code != ServiceCode::IDASIT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    require_nonzero("NumberDaysSIT", number_of_days as f64)?;
    check_minimum_weight(weight, config.min_international_weight)?;
    require_nonzero("PerUnitCents", per_unit_cents.f64())?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        per_unit_cents.f64(),
    )
    .context("could not calculate escalated price")?;

    let total =
        Cents::from_f64(escalated_price * weight.to_cwt_f64() * number_of_days as f64);

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(per_unit_cents),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
    ];
    Ok((total, display_params))
}

/// International SIT pickup/delivery (IOPSIT, IDDSIT)
///
/// Two-branch distance handling: over the short-distance threshold the
/// escalated rate is multiplied by distance, at or under it distance is
/// not billed. When the relevant leg ends OCONUS there is nothing to
/// drive, so the price is zero rather than an error.
#[allow(clippy::too_many_arguments)]
pub fn price_intl_pickup_delivery_sit(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    per_unit_cents: Cents,
    distance: Miles,
    market: Market,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::IOPSIT && code != ServiceCode::IDDSIT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    check_minimum_weight(weight, config.min_international_weight)?;
    require_nonzero("PerUnitCents", per_unit_cents.f64())?;

    let leg_is_oconus = market == Market::Oconus;
    if !leg_is_oconus && distance.0 <= 0 {
        return Err(PricingError::Validation(
            "Distance must be greater than 0".to_string(),
        ));
    }

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        per_unit_cents.f64(),
    )
    .context("could not calculate escalated price")?;

    let total = if leg_is_oconus {
        Cents(0)
    } else if distance > config.sit_short_distance_miles {
        Cents::from_f64(escalated_price * weight.to_cwt_f64() * distance.f64())
    } else {
        Cents::from_f64(escalated_price * weight.to_cwt_f64())
    };

    let display_params = vec![
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(per_unit_cents),
        ),
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
    ];
    Ok((total, display_params))
}

/// International crating/uncrating (ICRT, IUCRT), per cubic foot
///
/// Only external crates carry a volume floor; the uncapped total is always
/// recorded before the standalone cap clamps it.
#[allow(clippy::too_many_arguments)]
pub fn price_intl_crating(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    billed_cubic_feet: CubicFeet,
    standalone_crate: bool,
    standalone_crate_cap: Option<Cents>,
    external_crate: bool,
    market: Market,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::ICRT && code != ServiceCode::IUCRT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    if external_crate && billed_cubic_feet < config.min_external_crate_cubic_feet {
        return Err(PricingError::BelowMinimumCubicFeet {
            volume: billed_cubic_feet.f64(),
            minimum: config.min_external_crate_cubic_feet.f64(),
        });
    }
    if standalone_crate && standalone_crate_cap.is_none() {
        return Err(PricingError::Validation(
            "StandaloneCrateCap is required".to_string(),
        ));
    }

    let contract = repo.fetch_contract_by_code(contract_code)?;
    let accessorial = repo
        .fetch_international_accessorial_price(contract.id, code, market)
        .context("could not lookup international accessorial price")?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        accessorial.per_unit.f64(),
    )
    .context("could not calculate escalated price")?;

    let mut total = Cents::from_f64(escalated_price * billed_cubic_feet.f64());

    let display_params = vec![
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(accessorial.per_unit),
        ),
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
        DisplayParam::new(DisplayParamKey::UncappedRequestTotal, format_cents(total)),
    ];

    if standalone_crate {
        if let Some(cap) = standalone_crate_cap {
            if total > cap {
                total = cap;
            }
        }
    }
    Ok((total, display_params))
}
