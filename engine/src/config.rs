//! Process-wide pricing constants
//!
//! Everything here is read-only configuration injected into the formulas so
//! they stay independently testable. `EngineConfig::default()` carries the
//! negotiated production values.

use crate::units::{CubicFeet, Miles, Millicents, Pound};
use serde::{Deserialize, Serialize};

/// A month/day boundary that repeats every calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualDate {
    pub month: u32,
    pub day: u32,
}

/// Read-only pricing constants shared by every formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// First day of the annual peak period (inclusive)
    pub peak_start: AnnualDate,
    /// Last day of the annual peak period (inclusive)
    pub peak_end: AnnualDate,
    /// Minimum billable weight for domestic shipments
    pub min_domestic_weight: Pound,
    /// Minimum billable weight for international household-goods shipments
    pub min_international_weight: Pound,
    /// Minimum billable weight for international unaccompanied baggage
    pub min_ub_weight: Pound,
    /// Minimum billable crate volume
    pub min_crate_cubic_feet: CubicFeet,
    /// Minimum billable volume for external crates (international only)
    pub min_external_crate_cubic_feet: CubicFeet,
    /// Baseline diesel price the fuel surcharge is measured against
    pub base_diesel_fuel_price: Millicents,
    /// Distance at or under which SIT pickup/delivery uses the flat
    /// schedule-based rate instead of a per-mile one
    pub sit_short_distance_miles: Miles,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            peak_start: AnnualDate { month: 5, day: 15 },
            peak_end: AnnualDate { month: 9, day: 30 },
            min_domestic_weight: Pound(500),
            min_international_weight: Pound(500),
            min_ub_weight: Pound(300),
            min_crate_cubic_feet: CubicFeet(4.0),
            min_external_crate_cubic_feet: CubicFeet(4.0),
            base_diesel_fuel_price: Millicents(250_000),
            sit_short_distance_miles: Miles(50),
        }
    }
}
