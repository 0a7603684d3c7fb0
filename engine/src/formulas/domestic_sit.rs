//! Domestic storage-in-transit (SIT) formulas
//!
//! First-day and additional-day SIT are flat service-area rates. SIT
//! pickup/delivery routes between three pricing strategies based on how far
//! the goods moved: same ZIP3 bills like a shorthaul, a different ZIP3
//! within the short-distance threshold bills a flat schedule rate, and
//! anything farther bills like a linehaul.

use crate::config::EngineConfig;
use crate::display::{
    format_bool, format_cents, format_escalation, DisplayParam, DisplayParamKey, DisplayParams,
};
use crate::error::{require_nonempty, require_nonzero, PricingError, ResultContext};
use crate::escalation::{escalate_price_for_contract_year, is_peak_period};
use crate::formulas::domestic::{
    check_minimum_weight, price_domestic_linehaul, price_domestic_shorthaul,
};
use crate::models::ServiceCode;
use crate::repository::RateRepository;
use crate::units::{Cents, Miles, Pound};
use chrono::NaiveDate;

/// Which rate shape a SIT pickup/delivery bills under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitPricingStrategy {
    /// Same ZIP3: per-CWT-mile shorthaul rate
    Shorthaul,
    /// Different ZIP3 at or under the short-distance threshold: flat
    /// SIT-schedule rate, distance not billed
    OtherPrice,
    /// Different ZIP3 over the threshold: per-CWT-mile linehaul rate
    Linehaul,
}

/// Route a SIT pickup/delivery to its pricing strategy
///
/// The ZIP3 comparison decides first; the distance threshold only matters
/// once the ZIP3s differ.
pub fn select_sit_strategy(
    zip3_original: &str,
    zip3_actual: &str,
    distance: Miles,
    config: &EngineConfig,
) -> SitPricingStrategy {
    if zip3_original == zip3_actual {
        SitPricingStrategy::Shorthaul
    } else if distance <= config.sit_short_distance_miles {
        SitPricingStrategy::OtherPrice
    } else {
        SitPricingStrategy::Linehaul
    }
}

fn validate_zip(description: &str, zip: &str) -> Result<(), PricingError> {
    if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PricingError::Validation(format!(
            "invalid {description} postal code of {zip}"
        )));
    }
    Ok(())
}

/// First-day SIT (DOFSIT, DDFSIT), flat per-CWT service-area rate
///
/// PPM shipments skip the weight floor and bill at actual weight.
pub fn price_domestic_first_day_sit(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    service_area: &str,
    is_ppm: bool,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::DOFSIT && code != ServiceCode::DDFSIT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    if !is_ppm {
        check_minimum_weight(weight, config.min_domestic_weight)?;
    }
    require_nonempty("ServiceArea", service_area)?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;
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
            format_cents(area_price.price),
        ),
    ];
    Ok((total, display_params))
}

/// Additional-day SIT (DOASIT, DDASIT): first-day shape times days in SIT
pub fn price_domestic_additional_days_sit(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    service_area: &str,
    number_of_days: i32,
    is_ppm: bool,
) -> Result<(Cents, DisplayParams), PricingError> {
    if code != ServiceCode::DOASIT && code != ServiceCode::DDASIT {
        return Err(PricingError::UnsupportedCode(code.to_string()));
    }
    require_nonempty("ContractCode", contract_code)?;
    if !is_ppm {
        check_minimum_weight(weight, config.min_domestic_weight)?;
    }
    require_nonempty("ServiceArea", service_area)?;
    require_nonzero("NumberDaysSIT", number_of_days as f64)?;

    let is_peak = is_peak_period(reference_date, config);
    let contract = repo.fetch_contract_by_code(contract_code)?;
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

    let total =
        Cents::from_f64(escalated_price * weight.to_cwt_f64() * number_of_days as f64);

    let display_params = vec![
        DisplayParam::new(DisplayParamKey::ContractYearName, contract_year.name),
        DisplayParam::new(
            DisplayParamKey::PriceRateOrFactor,
            format_cents(area_price.price),
        ),
        DisplayParam::new(DisplayParamKey::IsPeak, format_bool(is_peak)),
        DisplayParam::new(
            DisplayParamKey::EscalationCompounded,
            format_escalation(contract_year.escalation_compounded),
        ),
    ];
    Ok((total, display_params))
}

/// SIT pickup/delivery (DOPSIT, DDDSIT)
///
/// Both postal codes must be five digits before any routing happens. The
/// shorthaul and linehaul branches delegate to the transport formulas and
/// wrap failures so the caller can tell which branch was taken.
#[allow(clippy::too_many_arguments)]
pub fn price_domestic_pickup_delivery_sit(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    contract_code: &str,
    reference_date: NaiveDate,
    weight: Pound,
    service_area: &str,
    sit_schedule: i32,
    zip_original: &str,
    zip_actual: &str,
    distance: Miles,
) -> Result<(Cents, DisplayParams), PricingError> {
    let (original_label, actual_label) = match code {
        ServiceCode::DOPSIT => ("SIT origin original", "SIT origin actual"),
        ServiceCode::DDDSIT => ("SIT original destination", "SIT final destination"),
        _ => return Err(PricingError::UnsupportedCode(code.to_string())),
    };
    require_nonempty("ContractCode", contract_code)?;
    check_minimum_weight(weight, config.min_domestic_weight)?;
    require_nonempty("ServiceArea", service_area)?;
    require_nonzero("SITSchedule", sit_schedule as f64)?;
    validate_zip(original_label, zip_original)?;
    validate_zip(actual_label, zip_actual)?;

    match select_sit_strategy(&zip_original[..3], &zip_actual[..3], distance, config) {
        SitPricingStrategy::Shorthaul => price_domestic_shorthaul(
            repo,
            config,
            contract_code,
            reference_date,
            distance,
            weight,
            service_area,
        )
        .context("could not price shorthaul"),
        SitPricingStrategy::Linehaul => price_domestic_linehaul(
            repo,
            config,
            contract_code,
            reference_date,
            distance,
            weight,
            service_area,
            false,
        )
        .context("could not price linehaul"),
        SitPricingStrategy::OtherPrice => {
            let is_peak = is_peak_period(reference_date, config);
            let contract = repo.fetch_contract_by_code(contract_code)?;
            let other_price = repo
                .fetch_domestic_other_price(contract.id, code, sit_schedule, is_peak)
                .context(&format!("could not fetch domestic {code} rate"))?;

            let (escalated_price, contract_year) = escalate_price_for_contract_year(
                repo,
                contract.id,
                reference_date,
                other_price.price.f64(),
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
                    format_cents(other_price.price),
                ),
            ];
            Ok((total, display_params))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_same_zip3_wins_over_distance() {
        let cfg = EngineConfig::default();
        // same ZIP3 is shorthaul even past the threshold
        assert_eq!(
            select_sit_strategy("945", "945", Miles(305), &cfg),
            SitPricingStrategy::Shorthaul
        );
    }

    #[test]
    fn test_strategy_different_zip3_splits_on_threshold() {
        let cfg = EngineConfig::default();
        assert_eq!(
            select_sit_strategy("945", "946", Miles(50), &cfg),
            SitPricingStrategy::OtherPrice
        );
        assert_eq!(
            select_sit_strategy("945", "946", Miles(51), &cfg),
            SitPricingStrategy::Linehaul
        );
    }

    #[test]
    fn test_validate_zip_rejects_short_and_non_numeric() {
        assert!(validate_zip("SIT origin actual", "9454").is_err());
        assert!(validate_zip("SIT origin actual", "94摩54").is_err());
        assert!(validate_zip("SIT origin actual", "94540").is_ok());
    }
}
