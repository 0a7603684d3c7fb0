//! Move Rate Engine
//!
//! Pricing calculation layer for household-goods relocation line items:
//! turns negotiated rate tables plus shipment attributes into an exact
//! whole-cent price and an audit trail explaining how it was derived.
//!
//! # Architecture
//!
//! - **units**: Strongly typed scalars (Cents, Millicents, Pound, Miles, CubicFeet)
//! - **models**: Domain types (contracts, services, rate-table rows)
//! - **config**: Injected pricing constants (peak window, weight floors, fuel baseline)
//! - **params**: Typed parameter bag and extraction
//! - **repository**: Read-only rate-table access behind a trait
//! - **escalation**: Contract-year resolution, peak-period test, price escalation
//! - **formulas**: Shared per-shape pure pricing functions
//! - **display**: Audit-trail keys and value formatting
//! - **pricers**: One pricer per service code plus the closed dispatch
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents or millicents)
//! 2. Escalation rounds at hundredth-cent precision; the final total is
//!    rounded to a whole cent exactly once
//! 3. Billed cubic feet are truncated, never rounded, to two decimals
//! 4. The fuel surcharge is signed: prices below the baseline are credits

pub mod config;
pub mod display;
pub mod error;
pub mod escalation;
pub mod formulas;
pub mod models;
pub mod params;
pub mod pricers;
pub mod repository;
pub mod units;

// Re-exports for convenience
pub use config::EngineConfig;
pub use display::{DisplayParam, DisplayParamKey, DisplayParams};
pub use error::PricingError;
pub use models::{Contract, ContractYear, Market, Service, ServiceCode};
pub use params::{ParamBag, ParamType, Parameter};
pub use pricers::{price_service_item, PriceResult};
pub use repository::{InMemoryRateRepository, RateRepository};
pub use units::{Cents, CubicFeet, Miles, Millicents, Pound};
