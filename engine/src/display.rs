//! Pricing display parameters — the audit trail returned with every price
//!
//! Each pricer explains its result as an ordered list of human-readable
//! key/value pairs (base rate, escalation, peak flag, contract year, ...).
//! Values are formatted here so every pricer renders them identically.

use crate::units::{Cents, Millicents};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Audit-trail keys produced by the pricing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayParamKey {
    ContractYearName,
    EscalationCompounded,
    IsPeak,
    PriceRateOrFactor,
    NTSPackingFactor,
    UncappedRequestTotal,
    FSCPriceDifferenceInCents,
    FSCMultiplier,
}

impl DisplayParamKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayParamKey::ContractYearName => "ContractYearName",
            DisplayParamKey::EscalationCompounded => "EscalationCompounded",
            DisplayParamKey::IsPeak => "IsPeak",
            DisplayParamKey::PriceRateOrFactor => "PriceRateOrFactor",
            DisplayParamKey::NTSPackingFactor => "NTSPackingFactor",
            DisplayParamKey::UncappedRequestTotal => "UncappedRequestTotal",
            DisplayParamKey::FSCPriceDifferenceInCents => "FSCPriceDifferenceInCents",
            DisplayParamKey::FSCMultiplier => "FSCMultiplier",
        }
    }
}

impl fmt::Display for DisplayParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audit-trail entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayParam {
    pub key: DisplayParamKey,
    pub value: String,
}

impl DisplayParam {
    pub fn new(key: DisplayParamKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Ordered list of audit-trail entries
pub type DisplayParams = Vec<DisplayParam>;

/// Cents rendered as dollars with two decimal places: 146 -> "1.46"
pub fn format_cents(cents: Cents) -> String {
    format!("{:.2}", cents.to_dollar_f64())
}

/// Millicents rendered as dollars with three decimal places: 5150 -> "0.052"
pub fn format_millicents(millicents: Millicents) -> String {
    format!("{:.3}", millicents.f64() / 100_000.0)
}

/// Escalation factors keep five decimal places: 1.0407 -> "1.04070"
pub fn format_escalation(escalation: f64) -> String {
    format_float(escalation, 5)
}

pub fn format_float(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Booleans render capitalized for display: "True" / "False"
pub fn format_bool(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents_as_dollars() {
        assert_eq!(format_cents(Cents(146)), "1.46");
        assert_eq!(format_cents(Cents(400090)), "4000.90");
        assert_eq!(format_cents(Cents(-721)), "-7.21");
    }

    #[test]
    fn test_format_millicents() {
        assert_eq!(format_millicents(Millicents(5150)), "0.052");
        assert_eq!(format_millicents(Millicents(250_000)), "2.500");
    }

    #[test]
    fn test_format_escalation() {
        assert_eq!(format_escalation(1.0407), "1.04070");
        assert_eq!(format_escalation(1.0), "1.00000");
    }

    #[test]
    fn test_format_float_precision() {
        assert_eq!(format_float(0.000417, 7), "0.0004170");
        assert_eq!(format_float(-7.6, 1), "-7.6");
    }

    #[test]
    fn test_format_bool_capitalized() {
        assert_eq!(format_bool(true), "True");
        assert_eq!(format_bool(false), "False");
    }
}
