//! Impactor - Asteroid Impact & Deflection Calculator
//!
//! A library crate providing the calculation engine behind an impact
//! simulator: consequence estimates for a strike at a chosen site, and the
//! outcome of kinetic-impactor or gravity-tractor deflection missions.
//!
//! All calculations are pure functions of their inputs. The one random draw a
//! deflection mission needs is passed in explicitly.

pub mod assessment;
pub mod deflection;
pub mod impact;
pub mod location;
pub mod scenarios;
pub mod types;
pub mod validation;

#[cfg(test)]
mod proptest_impact;
#[cfg(test)]
pub mod test_utils;

pub use assessment::{
    DeflectionOutcome, DeflectionRng, ImpactAssessment, ImpactPlugin, MitigationPlan,
};
pub use deflection::{
    estimate_deflection, simulate_deflection, simulate_deflection_with_rng, DeflectionEstimate,
    DeflectionResult, MitigationStrategy, StrategyKind, Trajectory,
};
pub use impact::{compute_impact, ImpactMetrics};
pub use location::{is_ocean_location, GeoPoint, ImpactSite};
pub use types::AsteroidParams;
pub use validation::{ParameterError, ParameterLimits};
