//! Domain models: contracts, services, and rate-table rows

pub mod contract;
pub mod rates;
pub mod service;

pub use contract::{Contract, ContractYear};
pub use rates::{
    DomesticAccessorialPrice, DomesticLinehaulPrice, DomesticOtherPrice, DomesticServiceAreaPrice,
    InternationalAccessorialPrice, ShipmentTypePrice, TaskOrderFee,
};
pub use service::{Market, Service, ServiceCode};
