//! Pricing error taxonomy
//!
//! Every formula validates its own preconditions before touching the rate
//! repository and returns the first violated one. Repository misses surface
//! as `NotFound` naming the specific lookup, so callers can tell "no such
//! contract" apart from "right contract, no rate for this key".

use crate::params::ParamType;
use thiserror::Error;

/// Errors returned by pricers, formulas, and parameter extraction
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A required field is missing, empty, or zero
    #[error("{0}")]
    Validation(String),

    /// Weight under the applicable floor; carries the offending value
    #[error("weight of {weight} is less than the minimum of {minimum}")]
    BelowMinimumWeight { weight: i32, minimum: i32 },

    /// Billed crate volume under the floor
    #[error("crate volume of {volume:.2} must be billed for a minimum of {minimum} cubic feet")]
    BelowMinimumCubicFeet { volume: f64, minimum: f64 },

    /// Parameter bag has no entry under this name
    #[error("could not find param with key {0}")]
    ParamNotFound(String),

    /// Parameter exists but was declared as a different type than required
    #[error("param {name} is declared as type {declared}, expected {required}")]
    ParamTypeMismatch {
        name: String,
        declared: ParamType,
        required: ParamType,
    },

    /// Parameter value string failed to parse as its declared type
    #[error("could not parse param {name}: {detail}")]
    ParamParse { name: String, detail: String },

    /// No matching contract, contract year, or rate row
    #[error("could not find {0}")]
    NotFound(String),

    /// A shared formula was invoked with a service code it does not implement
    #[error("unsupported service code of {0}")]
    UnsupportedCode(String),

    /// A lower-level failure wrapped with the step that hit it
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PricingError>,
    },
}

impl PricingError {
    /// Wrap with a higher-level step description
    pub fn context(self, context: impl Into<String>) -> PricingError {
        PricingError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    fn required(field: &str) -> PricingError {
        PricingError::Validation(format!("{field} is required"))
    }
}

/// Attach context to the error side of a pricing result
pub trait ResultContext<T> {
    fn context(self, context: &str) -> Result<T, PricingError>;
}

impl<T> ResultContext<T> for Result<T, PricingError> {
    fn context(self, context: &str) -> Result<T, PricingError> {
        self.map_err(|e| e.context(context))
    }
}

/// Fail with `"{field} is required"` when a string field is empty
pub fn require_nonempty(field: &str, value: &str) -> Result<(), PricingError> {
    if value.is_empty() {
        return Err(PricingError::required(field));
    }
    Ok(())
}

/// Fail with `"{field} is required"` when a numeric field is zero
pub fn require_nonzero(field: &str, value: f64) -> Result<(), PricingError> {
    if value == 0.0 {
        return Err(PricingError::required(field));
    }
    Ok(())
}
