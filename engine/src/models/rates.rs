//! Rate-table rows
//!
//! All rows are created and administered outside of this crate and are
//! read-only here. Keys mirror the backing schema: a price row is unique per
//! (contract, service, area-or-schedule-or-market, peak flag) combination.

use crate::models::service::{Market, ServiceCode};
use crate::units::{Cents, Miles, Millicents, Pound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base rate per CWT for service-area-keyed domestic services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomesticServiceAreaPrice {
    pub contract_id: Uuid,
    pub service: ServiceCode,
    pub service_area: String,
    pub is_peak_period: bool,
    pub price: Cents,
}

/// Linehaul rate per CWT-mile, bracketed by weight and mileage
///
/// Stored in millicents: the rate is multiplied by hundredweight and miles
/// before rounding, so whole cents would lose required precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomesticLinehaulPrice {
    pub contract_id: Uuid,
    pub service_area: String,
    pub is_peak_period: bool,
    pub weight_lower: Pound,
    pub weight_upper: Pound,
    pub miles_lower: Miles,
    pub miles_upper: Miles,
    pub price: Millicents,
}

/// Flat schedule-keyed rate for short-distance or accessorial services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomesticOtherPrice {
    pub contract_id: Uuid,
    pub service: ServiceCode,
    pub schedule: i32,
    pub is_peak_period: bool,
    pub price: Cents,
}

/// Per-unit rate for schedule-keyed domestic accessorials
/// (shuttling per CWT, crating per cubic foot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomesticAccessorialPrice {
    pub contract_id: Uuid,
    pub service: ServiceCode,
    pub services_schedule: i32,
    pub per_unit: Cents,
}

/// Per-unit rate for market-keyed international accessorials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternationalAccessorialPrice {
    pub contract_id: Uuid,
    pub service: ServiceCode,
    pub market: Market,
    pub per_unit: Cents,
}

/// Multiplicative market factor applied on top of a base price
/// (e.g. the NTS packing factor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentTypePrice {
    pub contract_id: Uuid,
    pub service: ServiceCode,
    pub market: Market,
    pub factor: f64,
}

/// Flat fee for task-order services, keyed by contract year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOrderFee {
    pub contract_year_id: Uuid,
    pub service_id: Uuid,
    pub price: Cents,
}
