//! Contracts and contract years

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A negotiated rate set, identified by a unique code
///
/// Immutable once referenced by a contract year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: Uuid,
    pub code: String,
}

/// One year of a contract's validity, carrying its escalation factors
///
/// Validity windows for a given contract never overlap, so a reference date
/// falls in zero or one contract year; zero is a lookup failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractYear {
    pub id: Uuid,
    pub contract_id: Uuid,
    /// Display name, e.g. "Base Period Year 1"
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Year-over-year escalation factor
    pub escalation: f64,
    /// Escalation compounded across all prior years
    pub escalation_compounded: f64,
}

impl ContractYear {
    /// True when the window `[start_date, end_date]` contains the date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
