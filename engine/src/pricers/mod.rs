//! Per-service-code pricers
//!
//! A pricer is the bridge between a parameter bag and a formula. Every
//! pricer exposes two entry points: `price` takes explicit typed arguments
//! and revalidates everything, `price_using_params` extracts those
//! arguments from a [`ParamBag`](crate::params::ParamBag) in a fixed order
//! (first missing or malformed parameter wins) and then calls `price`.
//!
//! [`price_service_item`] is the closed top-level dispatch from a service
//! code to its pricer.

pub mod domestic_accessorial;
pub mod domestic_sit;
pub mod domestic_transport;
pub mod fuel_surcharge;
pub mod international;
pub mod task_order;

use crate::config::EngineConfig;
use crate::display::DisplayParams;
use crate::error::PricingError;
use crate::models::ServiceCode;
use crate::params::ParamBag;
use crate::repository::RateRepository;
use crate::units::Cents;
use serde::{Deserialize, Serialize};

pub use domestic_accessorial::{
    DomesticCratingPricer, DomesticPackUnpackPricer, DomesticShuttlingPricer,
};
pub use domestic_sit::{
    DomesticAdditionalDaysSitPricer, DomesticFirstDaySitPricer, DomesticPickupDeliverySitPricer,
    DomesticSitFuelSurchargePricer,
};
pub use domestic_transport::{
    DomesticLinehaulPricer, DomesticServiceAreaPricer, DomesticShorthaulPricer,
};
pub use fuel_surcharge::FuelSurchargePricer;
pub use international::{
    IntlAdditionalDaySitPricer, IntlCratingPricer, IntlFirstDaySitPricer, IntlNtsPackPricer,
    IntlPackUnpackPricer, IntlPickupDeliverySitPricer, IntlShuttlingPricer,
    IntlSitFuelSurchargePricer,
};
pub use task_order::TaskOrderFeePricer;

/// A priced line item: the whole-cent total plus the audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub total: Cents,
    pub display_params: DisplayParams,
}

impl PriceResult {
    pub fn new(total: Cents, display_params: DisplayParams) -> Self {
        Self {
            total,
            display_params,
        }
    }
}

/// Price one service item from its parameter bag
///
/// The dispatch is closed over the [`ServiceCode`] enum, so a new service
/// code fails to compile here until it is routed to a pricer.
pub fn price_service_item(
    repo: &dyn RateRepository,
    config: &EngineConfig,
    code: ServiceCode,
    params: &ParamBag,
) -> Result<PriceResult, PricingError> {
    use ServiceCode::*;
    match code {
        DLH => DomesticLinehaulPricer.price_using_params(repo, config, params),
        DSH => DomesticShorthaulPricer.price_using_params(repo, config, params),
        DOP | DDP => DomesticServiceAreaPricer::new(code).price_using_params(repo, config, params),
        DPK | DNPK | DUPK => {
            DomesticPackUnpackPricer::new(code).price_using_params(repo, config, params)
        }
        DCRT | DUCRT => DomesticCratingPricer::new(code).price_using_params(repo, config, params),
        DOSHUT | DDSHUT => {
            DomesticShuttlingPricer::new(code).price_using_params(repo, config, params)
        }
        DOFSIT | DDFSIT => {
            DomesticFirstDaySitPricer::new(code).price_using_params(repo, config, params)
        }
        DOASIT | DDASIT => {
            DomesticAdditionalDaysSitPricer::new(code).price_using_params(repo, config, params)
        }
        DOPSIT | DDDSIT => {
            DomesticPickupDeliverySitPricer::new(code).price_using_params(repo, config, params)
        }
        DOSFSC | DDSFSC => {
            DomesticSitFuelSurchargePricer::new(code).price_using_params(repo, config, params)
        }
        FSC => FuelSurchargePricer.price_using_params(repo, config, params),
        IOSHUT | IDSHUT => {
            IntlShuttlingPricer::new(code).price_using_params(repo, config, params)
        }
        IHPK | IHUPK | IUBPK | IUBUPK => {
            IntlPackUnpackPricer::new(code).price_using_params(repo, config, params)
        }
        INPK => IntlNtsPackPricer.price_using_params(repo, config, params),
        IOFSIT | IDFSIT => {
            IntlFirstDaySitPricer::new(code).price_using_params(repo, config, params)
        }
        IOASIT | IDASIT => {
            IntlAdditionalDaySitPricer::new(code).price_using_params(repo, config, params)
        }
        IOPSIT | IDDSIT => {
            IntlPickupDeliverySitPricer::new(code).price_using_params(repo, config, params)
        }
        IOSFSC | IDSFSC => {
            IntlSitFuelSurchargePricer::new(code).price_using_params(repo, config, params)
        }
        ICRT | IUCRT => IntlCratingPricer::new(code).price_using_params(repo, config, params),
        MS | CS => TaskOrderFeePricer::new(code).price_using_params(repo, config, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayParam, DisplayParamKey};

    // Downstream billing consumes priced items as JSON; the field names
    // are part of that contract.
    #[test]
    fn test_price_result_json_shape() {
        let result = PriceResult::new(
            Cents(5470),
            vec![DisplayParam::new(
                DisplayParamKey::EscalationCompounded,
                "1.04070",
            )],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total"], 5470);
        assert_eq!(json["display_params"][0]["key"], "EscalationCompounded");
        assert_eq!(json["display_params"][0]["value"], "1.04070");
    }
}
