//! Domestic transport, packing, crating, and shuttling formulas

use crate::config::EngineConfig;
use crate::display::{
    format_bool, format_cents, format_escalation, format_float, format_millicents, DisplayParam,
    DisplayParamKey, DisplayParams,
};
use crate::error::{require_nonempty, require_nonzero, PricingError, ResultContext};
use crate::escalation::{escalate_price_for_contract_year, is_peak_period};
use crate::models::{Market, ServiceCode};
use crate::repository::RateRepository;
use crate::units::{Cents, CubicFeet, Miles, Pound};
use chrono::NaiveDate;

pub(crate) fn check_minimum_weight(
    weight: Pound,
    minimum: Pound,
) -> Result<(), PricingError> {
    if weight < minimum {
        return Err(PricingError::BelowMinimumWeight {
            weight: weight.0,
            minimum: minimum.0,
        });
    }
    Ok(())
}

fn check_positive_distance(distance: Miles) -> Result<(), PricingError> {
    if distance.0 <= 0 {
        return Err(PricingError::Validation(
            "Distance must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Per-CWT-mile linehaul pricing (DLH)
///
/// PPM shipments under the weight floor are priced at the floor and the
/// total is then prorated back down by actual/floor weight, so a 250 lb
/// PPM pays half of the 500 lb price.
pub fn price_domestic_linehaul(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    contract_code: &str,
    reference_date: NaiveDate,
    distance: Miles,
    weight: Pound,
    service_area: &str,
    is_ppm: bool,
) -> Result<(Cents, DisplayParams), PricingError> {
    require_nonempty("ContractCode", contract_code)?;
    check_positive_distance(distance)?;
    if !is_ppm {
        check_minimum_weight(weight, config.min_domestic_weight)?;
    }
    require_nonempty("ServiceArea", service_area)?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;

    let mut final_weight = weight;
    if is_ppm && weight < config.min_domestic_weight {
        final_weight = config.min_domestic_weight;
    }

    let linehaul = repo
        .fetch_domestic_linehaul_price(contract.id, service_area, is_peak, final_weight, distance)
        .context("could not fetch domestic linehaul rate")?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        linehaul.price.to_cents_f64(),
    )
    .context("could not calculate escalated price")?;

    let mut base_total = escalated_price * final_weight.to_cwt_f64() * distance.f64();
    if is_ppm && weight < final_weight {
        base_total *= weight.f64() / final_weight.f64();
    }
    let total = Cents::from_f64(base_total);

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_millicents(linehaul.price),
        ),
    ];
    Ok((total, display_params))
}

/// Per-CWT-mile shorthaul pricing (DSH), rate keyed by service area
pub fn price_domestic_shorthaul(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    contract_code: &str,
    reference_date: NaiveDate,
    distance: Miles,
    weight: Pound,
    service_area: &str,
) -> Result<(Cents, DisplayParams), PricingError> {
    require_nonempty("ContractCode", contract_code)?;
    check_positive_distance(distance)?;
    check_minimum_weight(weight, config.min_domestic_weight)?;
    require_nonempty("ServiceArea", service_area)?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;
    let area_price = repo
        .fetch_domestic_service_area_price(
            contract.id,
            ServiceCode::DSH,
            service_area,
            is_peak,
        )
        .context("could not fetch domestic shorthaul rate")?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        area_price.price.f64(),
    )
    .context("could not calculate escalated price")?;

    let total = Cents::from_f64(escalated_price * weight.to_cwt_f64() * distance.f64());

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(area_price.price),
        ),
    ];
    Ok((total, display_params))
}

/// Per-CWT origin/destination service-area pricing (DOP, DDP)
pub fn price_domestic_service_area(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    service_area: &str,
    is_ppm: bool,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::DOP && code != ServiceCode::DDP {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    if !is_ppm {
        check_minimum_weight(weight, config.min_domestic_weight)?;
    }
    require_nonempty("ServiceArea", service_area)?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;

    let mut final_weight = weight;
    if is_ppm && weight < config.min_domestic_weight {
        final_weight = config.min_domestic_weight;
    }

    let area_price = repo
        .fetch_domestic_service_area_price(contract.id, code, service_area, is_peak)
        .context(&format!("could not fetch domestic {code} rate"))?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        area_price.price.f64(),
    )
    .context("could not calculate escalated price")?;

    let mut base_total = escalated_price * final_weight.to_cwt_f64();
    if is_ppm && weight < final_weight {
        base_total *= weight.f64() / final_weight.f64();
    }
    let total = Cents::from_f64(base_total);

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(area_price.price),
        ),
    ];
    Ok((total, display_params))
}

/// Per-CWT packing and unpacking (DPK, DNPK, DUPK)
///
/// DNPK bills off the DPK base rate times the NTS (non-temporary storage)
/// market factor. PPM shipments get the same floor-and-prorate treatment
/// as linehaul.
pub fn price_domestic_pack_unpack(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    services_schedule: i32,
    is_ppm: bool,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::DPK && code != ServiceCode::DNPK && code != ServiceCode::DUPK {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    if !is_ppm {
        check_minimum_weight(weight, config.min_domestic_weight)?;
    }
    require_nonzero("ServicesSchedule", services_schedule as f64)?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;

    // NTS packing has no rate rows of its own; it reuses the DPK rate
    let lookup_code = if code == ServiceCode::DNPK {
        ServiceCode::DPK
    } else {
        code
    };
    let other_price = repo
        .fetch_domestic_other_price(contract.id, lookup_code, services_schedule, is_peak)
        .context(&format!("could not fetch domestic {lookup_code} rate"))?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        other_price.price.f64(),
    )
    .context("could not calculate escalated price")?;

    let mut display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(other_price.price),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
    ];

    let mut final_weight = weight;
    if is_ppm && weight < config.min_domestic_weight {
        final_weight = config.min_domestic_weight;
    }
    let mut base_total = escalated_price * final_weight.to_cwt_f64();

    // NTS packing adjusts the escalated, CWT-scaled price by the market factor
    if code == ServiceCode::DNPK {
        let factor = repo
            .fetch_market_factor(contract.id, ServiceCode::DNPK, Market::Conus)
            .context("could not fetch NTS packing factor")?;
        base_total *= factor;
        display_params.push(DisplayParam::new(
            DisplayParamKey::NTSPackingFactor,
            format_float(factor, 2),
        ));
    }

    if is_ppm && weight < final_weight {
        base_total *= weight.f64() / final_weight.f64();
    }
    let total = Cents::from_f64(base_total);
    Ok((total, display_params))
}

/// Per-cubic-foot crating and uncrating (DCRT, DUCRT)
///
/// Billed volume arrives already truncated to hundredths and must meet the
/// four-cubic-foot floor. Standalone crates are capped after the uncapped
/// total is recorded in the display params.
pub fn price_domestic_crating(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    billed_cubic_feet: CubicFeet,
    services_schedule: i32,
    standalone_crate: bool,
    standalone_crate_cap: Option<Cents>,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::DCRT && code != ServiceCode::DUCRT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    if billed_cubic_feet < config.min_crate_cubic_feet {
        return Err(PricingError::BelowMinimumCubicFeet {
            volume: billed_cubic_feet.f64(),
            minimum: config.min_crate_cubic_feet.f64(),
        });
    }
    require_nonzero("ServicesSchedule", services_schedule as f64)?;
    if standalone_crate && standalone_crate_cap.is_none() {
        return Err(PricingError::Validation(
            "StandaloneCrateCap is required".to_string(),
        ));
    }

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;
    let accessorial = repo
        .fetch_domestic_accessorial_price(contract.id, code, services_schedule)
        .context(&format!("could not fetch domestic {code} rate"))?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        accessorial.per_unit.f64(),
    )
    .context("could not calculate escalated price")?;

    let mut total = Cents::from_f64(escalated_price * billed_cubic_feet.f64());

    let mut display_params = vec![
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(accessorial.per_unit),
        ),
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
    ];

    if standalone_crate {
        display_params.push(DisplayParam::new(
            DisplayParamKey::UncappedRequestTotal,
            format_cents(total),
        ));
        if let Some(cap) = standalone_crate_cap {
            if total > cap {
                total = cap;
            }
        }
    }
    Ok((total, display_params))
}

/// Per-CWT shuttling (DOSHUT, DDSHUT)
pub fn price_domestic_shuttling(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    services_schedule: i32,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::DOSHUT && code != ServiceCode::DDSHUT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    check_minimum_weight(weight, config.min_domestic_weight)?;
    require_nonzero("ServicesSchedule", services_schedule as f64)?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;
    let accessorial = repo
        .fetch_domestic_accessorial_price(contract.id, code, services_schedule)
        .context(&format!("could not fetch domestic {code} rate"))?;

    let (escalated_price, contract_year) = escalate_price_for_contract_year(
        repo,
        contract.id,
        reference_date,
        accessorial.per_unit.f64(),
    )
    .context("could not calculate escalated price")?;

    let total = Cents::from_f64(escalated_price * weight.to_cwt_f64());

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(accessorial.per_unit),
        ),
    ];
    Ok((total, display_params))
}
