//! Input range checks for asteroid parameters, mitigation plans and map points.
//!
//! The calculation functions themselves never validate: out-of-range input
//! simply produces NaN or infinite numbers. Callers that accept user input
//! run it through [`ParameterLimits`] first and surface a [`ParameterError`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::deflection::{MitigationStrategy, StrategyKind};
use crate::types::AsteroidParams;

/// Reason an input value was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} = {value} outside accepted range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ParameterError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ParameterError::NonFinite { name, .. }
            | ParameterError::NonPositive { name, .. }
            | ParameterError::OutOfRange { name, .. } => name,
        }
    }
}

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive containment check.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, name: &'static str, value: f64) -> Result<f64, ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NonFinite { name, value });
        }
        if !self.contains(value) {
            return Err(ParameterError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    fn check_positive(&self, name: &'static str, value: f64) -> Result<f64, ParameterError> {
        if value.is_finite() && value <= 0.0 {
            return Err(ParameterError::NonPositive { name, value });
        }
        self.check(name, value)
    }
}

/// Accepted input ranges.
///
/// The defaults match the control panel ranges: sliders never produce values
/// outside them, so anything else is a programming or transport error.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterLimits {
    /// Asteroid diameter (m).
    pub diameter: Bounds,
    /// Entry velocity (km/s).
    pub velocity: Bounds,
    /// Impact angle (degrees).
    pub impact_angle: Bounds,
    /// Lead time for a kinetic impactor (years).
    pub kinetic_intervention: Bounds,
    /// Lead time for a gravity tractor (years).
    pub gravity_intervention: Bounds,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            diameter: Bounds::new(100.0, 1000.0),
            velocity: Bounds::new(10.0, 70.0),
            impact_angle: Bounds::new(15.0, 90.0),
            kinetic_intervention: Bounds::new(1.0, 10.0),
            gravity_intervention: Bounds::new(5.0, 15.0),
        }
    }
}

impl ParameterLimits {
    /// Limits that only enforce the calculation preconditions
    /// (finite, strictly positive sizes, speeds and lead times).
    pub fn permissive() -> Self {
        let positive = Bounds::new(0.0, f64::MAX);
        Self {
            diameter: positive,
            velocity: positive,
            impact_angle: Bounds::new(0.0, 90.0),
            kinetic_intervention: positive,
            gravity_intervention: positive,
        }
    }

    /// Intervention window accepted for the given strategy.
    pub fn intervention_bounds(&self, kind: StrategyKind) -> Bounds {
        match kind {
            StrategyKind::Kinetic => self.kinetic_intervention,
            StrategyKind::GravityTractor => self.gravity_intervention,
        }
    }

    pub fn validate_asteroid(&self, params: &AsteroidParams) -> Result<(), ParameterError> {
        self.diameter.check_positive("diameter", params.diameter)?;
        self.velocity.check_positive("velocity", params.velocity)?;
        self.impact_angle.check("impact_angle", params.impact_angle)?;
        Ok(())
    }

    pub fn validate_strategy(&self, strategy: &MitigationStrategy) -> Result<(), ParameterError> {
        self.intervention_bounds(strategy.kind)
            .check_positive("intervention_time", strategy.intervention_time)?;
        Ok(())
    }
}

/// Range check for a map coordinate pair.
pub(crate) fn check_coordinates(lat: f64, lng: f64) -> Result<(), ParameterError> {
    Bounds::new(-90.0, 90.0).check("lat", lat)?;
    Bounds::new(-180.0, 180.0).check("lng", lng)?;
    Ok(())
}
