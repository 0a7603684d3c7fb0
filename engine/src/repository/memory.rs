//! In-memory rate repository
//!
//! Reference implementation of [`RateRepository`] backed by plain vectors.
//! Production deployments put a database behind the trait; this one exists
//! for tests and for embedding small rate sets directly.

use crate::error::PricingError;
use crate::models::{
    Contract, ContractYear, DomesticAccessorialPrice, DomesticLinehaulPrice, DomesticOtherPrice,
    DomesticServiceAreaPrice, InternationalAccessorialPrice, Market, Service, ServiceCode,
    ShipmentTypePrice, TaskOrderFee,
};
use crate::repository::RateRepository;
use crate::units::{Miles, Pound};
use chrono::NaiveDate;
use uuid::Uuid;

/// Vector-backed rate store
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateRepository {
    contracts: Vec<Contract>,
    contract_years: Vec<ContractYear>,
    services: Vec<Service>,
    domestic_service_area_prices: Vec<DomesticServiceAreaPrice>,
    domestic_linehaul_prices: Vec<DomesticLinehaulPrice>,
    domestic_other_prices: Vec<DomesticOtherPrice>,
    domestic_accessorial_prices: Vec<DomesticAccessorialPrice>,
    international_accessorial_prices: Vec<InternationalAccessorialPrice>,
    shipment_type_prices: Vec<ShipmentTypePrice>,
    task_order_fees: Vec<TaskOrderFee>,
}

impl InMemoryRateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contract(&mut self, contract: Contract) {
        self.contracts.push(contract);
    }

    pub fn add_contract_year(&mut self, year: ContractYear) {
        self.contract_years.push(year);
    }

    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }

    pub fn add_domestic_service_area_price(&mut self, price: DomesticServiceAreaPrice) {
        self.domestic_service_area_prices.push(price);
    }

    pub fn add_domestic_linehaul_price(&mut self, price: DomesticLinehaulPrice) {
        self.domestic_linehaul_prices.push(price);
    }

    pub fn add_domestic_other_price(&mut self, price: DomesticOtherPrice) {
        self.domestic_other_prices.push(price);
    }

    pub fn add_domestic_accessorial_price(&mut self, price: DomesticAccessorialPrice) {
        self.domestic_accessorial_prices.push(price);
    }

    pub fn add_international_accessorial_price(&mut self, price: InternationalAccessorialPrice) {
        self.international_accessorial_prices.push(price);
    }

    pub fn add_shipment_type_price(&mut self, price: ShipmentTypePrice) {
        self.shipment_type_prices.push(price);
    }

    pub fn add_task_order_fee(&mut self, fee: TaskOrderFee) {
        self.task_order_fees.push(fee);
    }
}

impl RateRepository for InMemoryRateRepository {
    fn fetch_contract_by_code(&self, code: &str) -> Result<Contract, PricingError> {
        self.contracts
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .ok_or_else(|| PricingError::NotFound(format!("contract with code {code}")))
    }

    fn fetch_contract_year(
        &self,
        contract_id: Uuid,
        date: NaiveDate,
    ) -> Result<ContractYear, PricingError> {
        self.contract_years
            .iter()
            .find(|y| y.contract_id == contract_id && y.contains(date))
            .cloned()
            .ok_or_else(|| PricingError::NotFound(format!("contract year containing {date}")))
    }

    fn fetch_service_by_code(&self, code: ServiceCode) -> Result<Service, PricingError> {
        self.services
            .iter()
            .find(|s| s.code == code)
            .cloned()
            .ok_or_else(|| PricingError::NotFound(format!("service with code {code}")))
    }

    fn fetch_domestic_service_area_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        service_area: &str,
        is_peak_period: bool,
    ) -> Result<DomesticServiceAreaPrice, PricingError> {
        self.domestic_service_area_prices
            .iter()
            .find(|p| {
                p.contract_id == contract_id
                    && p.service == service
                    && p.service_area == service_area
                    && p.is_peak_period == is_peak_period
            })
            .cloned()
            .ok_or_else(|| {
                PricingError::NotFound(format!(
                    "domestic service area price for {service} in area {service_area}"
                ))
            })
    }

    fn fetch_domestic_linehaul_price(
        &self,
        contract_id: Uuid,
        service_area: &str,
        is_peak_period: bool,
        weight: Pound,
        distance: Miles,
    ) -> Result<DomesticLinehaulPrice, PricingError> {
        self.domestic_linehaul_prices
            .iter()
            .find(|p| {
                p.contract_id == contract_id
                    && p.service_area == service_area
                    && p.is_peak_period == is_peak_period
                    && p.weight_lower <= weight
                    && weight <= p.weight_upper
                    && p.miles_lower <= distance
                    && distance <= p.miles_upper
            })
            .cloned()
            .ok_or_else(|| {
                PricingError::NotFound(format!(
                    "domestic linehaul price for area {service_area}, {weight} lb, {distance} mi"
                ))
            })
    }

    fn fetch_domestic_other_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        schedule: i32,
        is_peak_period: bool,
    ) -> Result<DomesticOtherPrice, PricingError> {
        self.domestic_other_prices
            .iter()
            .find(|p| {
                p.contract_id == contract_id
                    && p.service == service
                    && p.schedule == schedule
                    && p.is_peak_period == is_peak_period
            })
            .cloned()
            .ok_or_else(|| {
                PricingError::NotFound(format!(
                    "domestic other price for {service} on schedule {schedule}"
                ))
            })
    }

    fn fetch_domestic_accessorial_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        services_schedule: i32,
    ) -> Result<DomesticAccessorialPrice, PricingError> {
        self.domestic_accessorial_prices
            .iter()
            .find(|p| {
                p.contract_id == contract_id
                    && p.service == service
                    && p.services_schedule == services_schedule
            })
            .cloned()
            .ok_or_else(|| {
                PricingError::NotFound(format!(
                    "domestic accessorial price for {service} on schedule {services_schedule}"
                ))
            })
    }

    fn fetch_international_accessorial_price(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        market: Market,
    ) -> Result<InternationalAccessorialPrice, PricingError> {
        self.international_accessorial_prices
            .iter()
            .find(|p| p.contract_id == contract_id && p.service == service && p.market == market)
            .cloned()
            .ok_or_else(|| {
                PricingError::NotFound(format!(
                    "international accessorial price for {service} in market {market}"
                ))
            })
    }

    fn fetch_market_factor(
        &self,
        contract_id: Uuid,
        service: ServiceCode,
        market: Market,
    ) -> Result<f64, PricingError> {
        self.shipment_type_prices
            .iter()
            .find(|p| p.contract_id == contract_id && p.service == service && p.market == market)
            .map(|p| p.factor)
            .ok_or_else(|| {
                PricingError::NotFound(format!(
                    "shipment type price for {service} in market {market}"
                ))
            })
    }

    fn fetch_task_order_fee(
        &self,
        contract_year_id: Uuid,
        service_id: Uuid,
    ) -> Result<TaskOrderFee, PricingError> {
        self.task_order_fees
            .iter()
            .find(|f| f.contract_year_id == contract_year_id && f.service_id == service_id)
            .cloned()
            .ok_or_else(|| PricingError::NotFound("task order fee".to_string()))
    }
}
