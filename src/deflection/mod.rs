//! Deflection mission outcome model.
//!
//! Converts the delta-v of a [`StrategyKind`] into a deflection angle along
//! the approach path, then into a miss distance at Earth. Whether the mission
//! counts as a success also depends on one uniform random draw, which callers
//! supply explicitly so runs can be reproduced.

pub mod strategy;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{
    round_to_decimals, AsteroidParams, EARTH_RADIUS_KM, METERS_PER_KM, RAD_TO_DEG,
};

pub use strategy::{MitigationStrategy, StrategyKind};

/// Label describing the post-mission trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trajectory {
    #[serde(rename = "Safe flyby")]
    SafeFlyby,
    #[serde(rename = "Insufficient deflection")]
    InsufficientDeflection,
}

impl Trajectory {
    pub fn label(&self) -> &'static str {
        match self {
            Trajectory::SafeFlyby => "Safe flyby",
            Trajectory::InsufficientDeflection => "Insufficient deflection",
        }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deterministic part of a deflection run, before any rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeflectionEstimate {
    /// Velocity change imparted to the asteroid (m/s).
    pub delta_v: f64,
    /// Lead time (s).
    pub time_to_impact: f64,
    /// Path length covered during the lead time (m).
    pub distance: f64,
    /// Angular deflection of the approach path (degrees).
    pub deflection_angle: f64,
    /// Chance the mission executes as planned.
    pub success_probability: f64,
    /// Chord displacement at Earth (km).
    pub miss_distance: f64,
}

impl DeflectionEstimate {
    /// Whether the displacement alone clears one Earth radius.
    pub fn clears_earth(&self) -> bool {
        self.miss_distance > EARTH_RADIUS_KM
    }

    /// Resolve the estimate against a uniform draw in `[0, 1)`.
    ///
    /// The mission succeeds only when the draw falls under the success
    /// probability *and* the geometry clears Earth.
    pub fn resolve(&self, draw: f64) -> DeflectionResult {
        let success = draw < self.success_probability && self.clears_earth();
        DeflectionResult {
            success,
            deflection_angle: round_to_decimals(self.deflection_angle, 3),
            new_trajectory: if success {
                Trajectory::SafeFlyby
            } else {
                Trajectory::InsufficientDeflection
            },
            miss_distance: self.miss_distance.round() as u64,
        }
    }
}

/// Outcome of one simulated deflection mission.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeflectionResult {
    pub success: bool,
    /// Degrees, rounded to 3 decimals.
    pub deflection_angle: f64,
    pub new_trajectory: Trajectory,
    /// Kilometers, rounded to the nearest integer.
    pub miss_distance: u64,
}

/// Compute the deterministic deflection geometry for a strategy.
///
/// Requires `params.velocity > 0` and `strategy.intervention_time > 0`;
/// otherwise the path length is zero and the angle is NaN.
pub fn estimate_deflection(
    params: &AsteroidParams,
    strategy: &MitigationStrategy,
) -> DeflectionEstimate {
    let mass = params.mass();
    let time_to_impact = strategy.time_to_impact();
    let delta_v = strategy.kind.delta_v(mass, time_to_impact);

    // Straight-line approach: lateral drift Δv·t over path length v·t
    let distance = params.velocity * METERS_PER_KM * time_to_impact;
    let deflection_angle = (delta_v * time_to_impact / distance).atan() * RAD_TO_DEG;

    let miss_distance =
        2.0 * EARTH_RADIUS_KM * (deflection_angle * std::f64::consts::PI / 180.0).sin();

    DeflectionEstimate {
        delta_v,
        time_to_impact,
        distance,
        deflection_angle,
        success_probability: strategy.success_probability(),
        miss_distance,
    }
}

/// Simulate a deflection mission against a pre-drawn uniform value in `[0, 1)`.
pub fn simulate_deflection(
    params: &AsteroidParams,
    strategy: &MitigationStrategy,
    draw: f64,
) -> DeflectionResult {
    estimate_deflection(params, strategy).resolve(draw)
}

/// Simulate a deflection mission, taking the single draw from `rng`.
pub fn simulate_deflection_with_rng<R: Rng>(
    params: &AsteroidParams,
    strategy: &MitigationStrategy,
    rng: &mut R,
) -> DeflectionResult {
    let draw: f64 = rng.gen_range(0.0..1.0);
    simulate_deflection(params, strategy, draw)
}
