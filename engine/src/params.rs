//! Parameter bag and typed extractors
//!
//! The caller assembles line-item inputs as (name, declared type, string
//! value) triples. Extractors assert the declared type and parse the value,
//! so the formulas behind them never see untyped data. No defaulting happens
//! here: optional semantics are expressed as explicit `optional_*` lookups
//! at the call site.

use crate::error::PricingError;
use crate::models::Market;
use crate::units::{Cents, CubicFeet, Miles, Millicents, Pound};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed wire format for date parameters
pub const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// Well-known parameter names
pub mod names {
    pub const CONTRACT_CODE: &str = "ContractCode";
    pub const REFERENCE_DATE: &str = "ReferenceDate";
    pub const ACTUAL_PICKUP_DATE: &str = "ActualPickupDate";
    pub const MTO_AVAILABLE_TO_PRIME_AT: &str = "MTOAvailableToPrimeAt";
    pub const WEIGHT_BILLED: &str = "WeightBilled";
    pub const DISTANCE_ZIP: &str = "DistanceZip";
    pub const DISTANCE_ZIP_SIT_ORIGIN: &str = "DistanceZipSITOrigin";
    pub const DISTANCE_ZIP_SIT_DEST: &str = "DistanceZipSITDest";
    pub const SERVICE_AREA_ORIGIN: &str = "ServiceAreaOrigin";
    pub const SERVICE_AREA_DEST: &str = "ServiceAreaDest";
    pub const SERVICES_SCHEDULE_ORIGIN: &str = "ServicesScheduleOrigin";
    pub const SERVICES_SCHEDULE_DEST: &str = "ServicesScheduleDest";
    pub const SIT_SCHEDULE_ORIGIN: &str = "SITScheduleOrigin";
    pub const SIT_SCHEDULE_DEST: &str = "SITScheduleDest";
    pub const NUMBER_DAYS_SIT: &str = "NumberDaysSIT";
    pub const ZIP_DEST_ADDRESS: &str = "ZipDestAddress";
    pub const ZIP_SIT_ORIGIN_ORIGINAL_ADDRESS: &str = "ZipSITOriginHHGOriginalAddress";
    pub const ZIP_SIT_ORIGIN_ACTUAL_ADDRESS: &str = "ZipSITOriginHHGActualAddress";
    pub const ZIP_SIT_DEST_FINAL_ADDRESS: &str = "ZipSITDestHHGFinalAddress";
    pub const CUBIC_FEET_BILLED: &str = "CubicFeetBilled";
    pub const STANDALONE_CRATE: &str = "StandaloneCrate";
    pub const STANDALONE_CRATE_CAP: &str = "StandaloneCrateCap";
    pub const EXTERNAL_CRATE: &str = "ExternalCrate";
    pub const MARKET_ORIGIN: &str = "MarketOrigin";
    pub const MARKET_DEST: &str = "MarketDest";
    pub const PER_UNIT_CENTS: &str = "PerUnitCents";
    pub const EIA_FUEL_PRICE: &str = "EIAFuelPrice";
    pub const FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER: &str = "FSCWeightBasedDistanceMultiplier";
    pub const IS_PPM: &str = "IsPPM";
}

/// Declared type of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    String,
    Date,
    Timestamp,
    Integer,
    Decimal,
    Boolean,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamType::String => "STRING",
            ParamType::Date => "DATE",
            ParamType::Timestamp => "TIMESTAMP",
            ParamType::Integer => "INTEGER",
            ParamType::Decimal => "DECIMAL",
            ParamType::Boolean => "BOOLEAN",
        };
        f.write_str(s)
    }
}

/// One externally supplied input: name, declared type, string value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub param_type: ParamType,
    pub value: String,
}

impl Parameter {
    pub fn new(name: &str, param_type: ParamType, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            value: value.into(),
        }
    }
}

/// Ordered collection of parameters, looked up by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamBag {
    params: Vec<Parameter>,
}

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn with(mut self, name: &str, param_type: ParamType, value: impl Into<String>) -> Self {
        self.params.push(Parameter::new(name, param_type, value));
        self
    }

    pub fn push(&mut self, param: Parameter) {
        self.params.push(param);
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    fn require(&self, name: &str, required: ParamType) -> Result<&Parameter, PricingError> {
        let param = self
            .get(name)
            .ok_or_else(|| PricingError::ParamNotFound(name.to_string()))?;
        if param.param_type != required {
            return Err(PricingError::ParamTypeMismatch {
                name: name.to_string(),
                declared: param.param_type,
                required,
            });
        }
        Ok(param)
    }

    fn parse_error(name: &str, detail: impl fmt::Display) -> PricingError {
        PricingError::ParamParse {
            name: name.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn string_param(&self, name: &str) -> Result<String, PricingError> {
        Ok(self.require(name, ParamType::String)?.value.clone())
    }

    pub fn integer_param(&self, name: &str) -> Result<i64, PricingError> {
        let param = self.require(name, ParamType::Integer)?;
        param
            .value
            .trim()
            .parse::<i64>()
            .map_err(|e| Self::parse_error(name, e))
    }

    pub fn decimal_param(&self, name: &str) -> Result<f64, PricingError> {
        let param = self.require(name, ParamType::Decimal)?;
        param
            .value
            .trim()
            .parse::<f64>()
            .map_err(|e| Self::parse_error(name, e))
    }

    pub fn date_param(&self, name: &str) -> Result<NaiveDate, PricingError> {
        let param = self.require(name, ParamType::Date)?;
        NaiveDate::parse_from_str(param.value.trim(), DATE_PARAM_FORMAT)
            .map_err(|e| Self::parse_error(name, e))
    }

    /// RFC 3339 timestamp, normalized to UTC
    pub fn timestamp_param(&self, name: &str) -> Result<NaiveDateTime, PricingError> {
        let param = self.require(name, ParamType::Timestamp)?;
        DateTime::parse_from_rfc3339(param.value.trim())
            .map(|dt| dt.naive_utc())
            .map_err(|e| Self::parse_error(name, e))
    }

    pub fn boolean_param(&self, name: &str) -> Result<bool, PricingError> {
        let param = self.require(name, ParamType::Boolean)?;
        match param.value.trim() {
            "true" | "True" => Ok(true),
            "false" | "False" => Ok(false),
            other => Err(Self::parse_error(name, format!("invalid boolean {other}"))),
        }
    }

    /// Market code parameter: declared as a string, parsed as "C"/"O"
    pub fn market_param(&self, name: &str) -> Result<Market, PricingError> {
        let value = self.string_param(name)?;
        Market::from_code(value.trim()).map_err(|e| Self::parse_error(name, e))
    }

    // Typed conveniences over the raw extractors.

    pub fn weight_param(&self, name: &str) -> Result<Pound, PricingError> {
        Ok(Pound(self.integer_param(name)? as i32))
    }

    pub fn miles_param(&self, name: &str) -> Result<Miles, PricingError> {
        Ok(Miles(self.integer_param(name)? as i32))
    }

    pub fn cents_param(&self, name: &str) -> Result<Cents, PricingError> {
        Ok(Cents(self.integer_param(name)?))
    }

    pub fn millicents_param(&self, name: &str) -> Result<Millicents, PricingError> {
        Ok(Millicents(self.integer_param(name)?))
    }

    /// Billed volume, truncated to two decimal places on the way in
    pub fn cubic_feet_param(&self, name: &str) -> Result<CubicFeet, PricingError> {
        Ok(CubicFeet(self.decimal_param(name)?).truncated())
    }

    pub fn schedule_param(&self, name: &str) -> Result<i32, PricingError> {
        Ok(self.integer_param(name)? as i32)
    }

    /// Explicit optional lookup: absent is `None`, present must still parse
    pub fn optional_boolean_param(&self, name: &str) -> Result<Option<bool>, PricingError> {
        if self.get(name).is_none() {
            return Ok(None);
        }
        self.boolean_param(name).map(Some)
    }

    /// Explicit optional lookup for cents-valued parameters
    pub fn optional_cents_param(&self, name: &str) -> Result<Option<Cents>, PricingError> {
        if self.get(name).is_none() {
            return Ok(None);
        }
        self.cents_param(name).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> ParamBag {
        ParamBag::new()
            .with(names::CONTRACT_CODE, ParamType::String, "TEST_CODE")
            .with(names::REFERENCE_DATE, ParamType::Date, "2020-06-05")
            .with(names::WEIGHT_BILLED, ParamType::Integer, "4025")
            .with(
                names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER,
                ParamType::Decimal,
                "0.000417",
            )
            .with(names::STANDALONE_CRATE, ParamType::Boolean, "true")
            .with(names::MARKET_ORIGIN, ParamType::String, "O")
    }

    #[test]
    fn test_missing_param() {
        let err = bag().integer_param(names::DISTANCE_ZIP).unwrap_err();
        assert_eq!(
            err,
            PricingError::ParamNotFound(names::DISTANCE_ZIP.to_string())
        );
        assert_eq!(
            err.to_string(),
            "could not find param with key DistanceZip"
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = bag().integer_param(names::CONTRACT_CODE).unwrap_err();
        assert_eq!(
            err,
            PricingError::ParamTypeMismatch {
                name: names::CONTRACT_CODE.to_string(),
                declared: ParamType::String,
                required: ParamType::Integer,
            }
        );
    }

    #[test]
    fn test_parse_failure() {
        let bad = ParamBag::new().with(names::WEIGHT_BILLED, ParamType::Integer, "heavy");
        assert!(matches!(
            bad.integer_param(names::WEIGHT_BILLED),
            Err(PricingError::ParamParse { .. })
        ));
    }

    #[test]
    fn test_typed_extraction() {
        let bag = bag();
        assert_eq!(bag.string_param(names::CONTRACT_CODE).unwrap(), "TEST_CODE");
        assert_eq!(bag.weight_param(names::WEIGHT_BILLED).unwrap(), Pound(4025));
        assert_eq!(
            bag.date_param(names::REFERENCE_DATE).unwrap(),
            NaiveDate::from_ymd_opt(2020, 6, 5).unwrap()
        );
        assert_eq!(
            bag.decimal_param(names::FSC_WEIGHT_BASED_DISTANCE_MULTIPLIER)
                .unwrap(),
            0.000417
        );
        assert_eq!(bag.market_param(names::MARKET_ORIGIN).unwrap(), Market::Oconus);
    }

    #[test]
    fn test_optional_lookup_is_explicit() {
        let bag = bag();
        assert_eq!(bag.optional_boolean_param(names::IS_PPM).unwrap(), None);
        assert_eq!(
            bag.optional_boolean_param(names::STANDALONE_CRATE).unwrap(),
            Some(true)
        );
        // present but malformed still fails
        let bad = ParamBag::new().with(names::IS_PPM, ParamType::Boolean, "yes");
        assert!(bad.optional_boolean_param(names::IS_PPM).is_err());
    }

    #[test]
    fn test_cubic_feet_truncated_on_extraction() {
        let bag = ParamBag::new().with(names::CUBIC_FEET_BILLED, ParamType::Decimal, "10.005");
        assert_eq!(
            bag.cubic_feet_param(names::CUBIC_FEET_BILLED).unwrap(),
            CubicFeet(10.00)
        );
    }

    #[test]
    fn test_timestamp_param() {
        let bag = ParamBag::new().with(
            names::MTO_AVAILABLE_TO_PRIME_AT,
            ParamType::Timestamp,
            "2020-06-05T07:33:11Z",
        );
        let ts = bag.timestamp_param(names::MTO_AVAILABLE_TO_PRIME_AT).unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2020, 6, 5).unwrap());
    }
}
