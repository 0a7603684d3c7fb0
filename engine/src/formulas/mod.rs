//! Shared pricing formulas
//!
//! One pure function per rate *shape*, shared across the service codes that
//! bill that shape. Every formula validates all of its own preconditions
//! (fixed order, first violation wins) before touching the rate repository,
//! then escalates, applies the weight/volume/distance multipliers, and
//! rounds to a whole cent at the end.

pub mod domestic;
pub mod domestic_sit;
pub mod fuel;
pub mod intl;

pub use domestic_sit::{select_sit_strategy, SitPricingStrategy};
