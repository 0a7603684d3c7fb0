//! Service codes and markets
//!
//! The service-code set is closed: it is fixed by the rate-table schema, so
//! pricers dispatch over this enum rather than any open-ended registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A priceable service, as stored in the rate tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub code: ServiceCode,
}

/// Every service code the engine can price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCode {
    // Domestic transport
    /// Domestic linehaul
    DLH,
    /// Domestic shorthaul
    DSH,
    /// Domestic origin price
    DOP,
    /// Domestic destination price
    DDP,
    // Domestic SIT
    /// Domestic origin 1st day SIT
    DOFSIT,
    /// Domestic destination 1st day SIT
    DDFSIT,
    /// Domestic origin additional days SIT
    DOASIT,
    /// Domestic destination additional days SIT
    DDASIT,
    /// Domestic origin SIT pickup
    DOPSIT,
    /// Domestic destination SIT delivery
    DDDSIT,
    /// Domestic origin SIT fuel surcharge
    DOSFSC,
    /// Domestic destination SIT fuel surcharge
    DDSFSC,
    // Domestic accessorials
    /// Domestic packing
    DPK,
    /// Domestic NTS packing (HHG pack rate times NTS market factor)
    DNPK,
    /// Domestic unpacking
    DUPK,
    /// Domestic crating
    DCRT,
    /// Domestic uncrating
    DUCRT,
    /// Domestic origin shuttle service
    DOSHUT,
    /// Domestic destination shuttle service
    DDSHUT,
    /// Fuel surcharge
    FSC,
    // International
    /// International HHG pack
    IHPK,
    /// International HHG unpack
    IHUPK,
    /// International UB pack
    IUBPK,
    /// International UB unpack
    IUBUPK,
    /// International NTS packing (HHG pack rate times NTS market factor)
    INPK,
    /// International crating
    ICRT,
    /// International uncrating
    IUCRT,
    /// International origin shuttle service
    IOSHUT,
    /// International destination shuttle service
    IDSHUT,
    /// International origin 1st day SIT
    IOFSIT,
    /// International destination 1st day SIT
    IDFSIT,
    /// International origin additional days SIT
    IOASIT,
    /// International destination additional days SIT
    IDASIT,
    /// International origin SIT pickup
    IOPSIT,
    /// International destination SIT delivery
    IDDSIT,
    /// International origin SIT fuel surcharge
    IOSFSC,
    /// International destination SIT fuel surcharge
    IDSFSC,
    // Task order
    /// Move management
    MS,
    /// Counseling
    CS,
}

impl ServiceCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCode::DLH => "DLH",
            ServiceCode::DSH => "DSH",
            ServiceCode::DOP => "DOP",
            ServiceCode::DDP => "DDP",
            ServiceCode::DOFSIT => "DOFSIT",
            ServiceCode::DDFSIT => "DDFSIT",
            ServiceCode::DOASIT => "DOASIT",
            ServiceCode::DDASIT => "DDASIT",
            ServiceCode::DOPSIT => "DOPSIT",
            ServiceCode::DDDSIT => "DDDSIT",
            ServiceCode::DOSFSC => "DOSFSC",
            ServiceCode::DDSFSC => "DDSFSC",
            ServiceCode::DPK => "DPK",
            ServiceCode::DNPK => "DNPK",
            ServiceCode::DUPK => "DUPK",
            ServiceCode::DCRT => "DCRT",
            ServiceCode::DUCRT => "DUCRT",
            ServiceCode::DOSHUT => "DOSHUT",
            ServiceCode::DDSHUT => "DDSHUT",
            ServiceCode::FSC => "FSC",
            ServiceCode::IHPK => "IHPK",
            ServiceCode::IHUPK => "IHUPK",
            ServiceCode::IUBPK => "IUBPK",
            ServiceCode::IUBUPK => "IUBUPK",
            ServiceCode::INPK => "INPK",
            ServiceCode::ICRT => "ICRT",
            ServiceCode::IUCRT => "IUCRT",
            ServiceCode::IOSHUT => "IOSHUT",
            ServiceCode::IDSHUT => "IDSHUT",
            ServiceCode::IOFSIT => "IOFSIT",
            ServiceCode::IDFSIT => "IDFSIT",
            ServiceCode::IOASIT => "IOASIT",
            ServiceCode::IDASIT => "IDASIT",
            ServiceCode::IOPSIT => "IOPSIT",
            ServiceCode::IDDSIT => "IDDSIT",
            ServiceCode::IOSFSC => "IOSFSC",
            ServiceCode::IDSFSC => "IDSFSC",
            ServiceCode::MS => "MS",
            ServiceCode::CS => "CS",
        }
    }

    /// True for unaccompanied-baggage codes, which use a lower weight floor
    pub fn is_unaccompanied_baggage(&self) -> bool {
        matches!(self, ServiceCode::IUBPK | ServiceCode::IUBUPK)
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DLH" => Ok(ServiceCode::DLH),
            "DSH" => Ok(ServiceCode::DSH),
            "DOP" => Ok(ServiceCode::DOP),
            "DDP" => Ok(ServiceCode::DDP),
            "DOFSIT" => Ok(ServiceCode::DOFSIT),
            "DDFSIT" => Ok(ServiceCode::DDFSIT),
            "DOASIT" => Ok(ServiceCode::DOASIT),
            "DDASIT" => Ok(ServiceCode::DDASIT),
            "DOPSIT" => Ok(ServiceCode::DOPSIT),
            "DDDSIT" => Ok(ServiceCode::DDDSIT),
            "DOSFSC" => Ok(ServiceCode::DOSFSC),
            "DDSFSC" => Ok(ServiceCode::DDSFSC),
            "DPK" => Ok(ServiceCode::DPK),
            "DNPK" => Ok(ServiceCode::DNPK),
            "DUPK" => Ok(ServiceCode::DUPK),
            "DCRT" => Ok(ServiceCode::DCRT),
            "DUCRT" => Ok(ServiceCode::DUCRT),
            "DOSHUT" => Ok(ServiceCode::DOSHUT),
            "DDSHUT" => Ok(ServiceCode::DDSHUT),
            "FSC" => Ok(ServiceCode::FSC),
            "IHPK" => Ok(ServiceCode::IHPK),
            "IHUPK" => Ok(ServiceCode::IHUPK),
            "IUBPK" => Ok(ServiceCode::IUBPK),
            "IUBUPK" => Ok(ServiceCode::IUBUPK),
            "INPK" => Ok(ServiceCode::INPK),
            "ICRT" => Ok(ServiceCode::ICRT),
            "IUCRT" => Ok(ServiceCode::IUCRT),
            "IOSHUT" => Ok(ServiceCode::IOSHUT),
            "IDSHUT" => Ok(ServiceCode::IDSHUT),
            "IOFSIT" => Ok(ServiceCode::IOFSIT),
            "IDFSIT" => Ok(ServiceCode::IDFSIT),
            "IOASIT" => Ok(ServiceCode::IOASIT),
            "IDASIT" => Ok(ServiceCode::IDASIT),
            "IOPSIT" => Ok(ServiceCode::IOPSIT),
            "IDDSIT" => Ok(ServiceCode::IDDSIT),
            "IOSFSC" => Ok(ServiceCode::IOSFSC),
            "IDSFSC" => Ok(ServiceCode::IDSFSC),
            "MS" => Ok(ServiceCode::MS),
            "CS" => Ok(ServiceCode::CS),
            other => Err(format!("unknown service code {other}")),
        }
    }
}

/// Coded rate-table region
///
/// International rates are keyed by market rather than postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    /// Continental United States
    Conus,
    /// Outside the continental United States
    Oconus,
}

impl Market {
    pub fn code(&self) -> &'static str {
        match self {
            Market::Conus => "C",
            Market::Oconus => "O",
        }
    }

    pub fn from_code(code: &str) -> Result<Market, String> {
        match code {
            "C" => Ok(Market::Conus),
            "O" => Ok(Market::Oconus),
            other => Err(format!("unknown market code {other}")),
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
