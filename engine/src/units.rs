//! Strongly typed scalar units used by the rate engine
//!
//! All money values are i64 (cents or millicents). Rates that are applied
//! per-hundredweight-mile need sub-cent precision, so linehaul prices are
//! carried in millicents (1000 millicents = 1 cent) until the final
//! rounding step.
//!
//! CRITICAL: conversions round exactly once, at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Money in whole cents
///
/// # Example
/// ```
/// use move_rate_engine::units::Cents;
///
/// let price = Cents(5470);
/// assert_eq!(price.to_dollar_f64(), 54.70);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cents(pub i64);

impl Cents {
    /// Value as a float, still denominated in cents
    pub fn f64(self) -> f64 {
        self.0 as f64
    }

    /// Value in dollars
    pub fn to_dollar_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Round a float cents value to the nearest whole cent
    pub fn from_f64(value: f64) -> Self {
        Cents(value.round() as i64)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Cents {
    type Output = Cents;
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl Neg for Cents {
    type Output = Cents;
    fn neg(self) -> Cents {
        Cents(-self.0)
    }
}

/// Money in millicents (1000 millicents = 1 cent)
///
/// Linehaul rates are stored at this precision because they are multiplied
/// by hundredweight and mileage before any rounding happens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Millicents(pub i64);

impl Millicents {
    pub fn f64(self) -> f64 {
        self.0 as f64
    }

    /// Value as a float denominated in cents
    pub fn to_cents_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Convert to whole cents, rounding half away from zero
    ///
    /// # Example
    /// ```
    /// use move_rate_engine::units::{Cents, Millicents};
    ///
    /// assert_eq!(Millicents(45_944_438).to_cents(), Cents(45_944));
    /// assert_eq!(Millicents(1_500).to_cents(), Cents(2));
    /// assert_eq!(Millicents(-1_500).to_cents(), Cents(-2));
    /// ```
    pub fn to_cents(self) -> Cents {
        Cents((self.0 as f64 / 1000.0).round() as i64)
    }
}

impl Sub for Millicents {
    type Output = Millicents;
    fn sub(self, rhs: Millicents) -> Millicents {
        Millicents(self.0 - rhs.0)
    }
}

/// Shipment weight in pounds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Pound(pub i32);

impl Pound {
    /// Weight in hundredweight (CWT), the unit most rates scale per
    ///
    /// # Example
    /// ```
    /// use move_rate_engine::units::Pound;
    ///
    /// assert_eq!(Pound(3600).to_cwt_f64(), 36.0);
    /// ```
    pub fn to_cwt_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Pound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travel distance in miles
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Miles(pub i32);

impl Miles {
    pub fn f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Miles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Crate volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct CubicFeet(pub f64);

impl CubicFeet {
    pub fn f64(self) -> f64 {
        self.0
    }

    /// Truncate (never round) to two decimal places
    ///
    /// Billed volume drops fractional hundredths instead of rounding them,
    /// so 10.005 cu ft prices identically to 10.00 cu ft.
    ///
    /// # Example
    /// ```
    /// use move_rate_engine::units::CubicFeet;
    ///
    /// assert_eq!(CubicFeet(10.005).truncated(), CubicFeet(10.00));
    /// assert_eq!(CubicFeet(4.999).truncated(), CubicFeet(4.99));
    /// ```
    pub fn truncated(self) -> CubicFeet {
        CubicFeet((self.0 * 100.0).trunc() / 100.0)
    }
}

impl fmt::Display for CubicFeet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
