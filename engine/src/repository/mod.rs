//! Read-only access to the negotiated rate tables
//!
//! The pricing core only ever reads rate data; population and administration
//! happen elsewhere. Every fetch either returns the single matching row or a
//! `NotFound` error naming the lookup that missed, so callers can tell "no
//! such contract" apart from "right contract, no rate for this key".

pub mod memory;

use crate::error::PricingError;
use crate::models::{
    Contract, ContractYear, DomesticAccessorialPrice, DomesticLinehaulPrice, DomesticOtherPrice,
    DomesticServiceAreaPrice, InternationalAccessorialPrice, Market, Service, ServiceCode,
    TaskOrderFee,
};
use crate::units::{Miles, Pound};
use chrono::NaiveDate;
use uuid::Uuid;

pub use memory::InMemoryRateRepository;

/// Read-only queries against the rate tables
///
/// Implementations are expected to be side-effect free; the engine holds no
/// locks and imposes no timeout or retry policy of its own.
pub trait RateRepository {
    fn fetch_contract_by_code(&self, code: &str) -> Result<Contract, PricingError>;

    /// The contract year whose `[start_date, end_date]` window contains the
    /// date; windows never overlap, so zero or one row matches
    fn fetch_contract_year(
        &self,
        contract_id: Uuid,
        date: NaiveDate,
    ) -> Result<ContractYear, PricingError>;

    fn fetch_service_by_code(&self, code: ServiceCode) -> Result<Service, PricingError>;

    fn fetch_domestic_service_area_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        service_area: &str,
        is_peak_period: bool,
    ) -> Result<DomesticServiceAreaPrice, PricingError>;

    /// Bracket lookup: the row whose weight and mileage ranges contain the
    /// given values
    fn fetch_domestic_linehaul_price(
        &self,
        contract_id: Uuid,
        service_area: &str,
        is_peak_period: bool,
        weight: Pound,
        distance: Miles,
    ) -> Result<DomesticLinehaulPrice, PricingError>;

    fn fetch_domestic_other_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        schedule: i32,
        is_peak_period: bool,
    ) -> Result<DomesticOtherPrice, PricingError>;

    fn fetch_domestic_accessorial_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        services_schedule: i32,
    ) -> Result<DomesticAccessorialPrice, PricingError>;

    fn fetch_international_accessorial_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        market: Market,
    ) -> Result<InternationalAccessorialPrice, PricingError>;

    /// Market factor applied on top of a base price (NTS packing et al.)
    fn fetch_market_factor(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        market: Market,
    ) -> Result<f64, PricingError>;

    fn fetch_task_order_fee(
        &self,
        contract_year_id: Uuid,
        service_id: Uuid,
    ) -> Result<TaskOrderFee, PricingError>;
}
