//! Core physical types and constants shared by the impact and deflection models.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physical constants (SI units unless noted)

/// Bulk density assumed for every asteroid (kg/m³).
pub const ASTEROID_DENSITY: f64 = 3000.0;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Energy released by one megaton of TNT (J).
pub const JOULES_PER_MEGATON: f64 = 4.184 * 1e15;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Physical description of an incoming asteroid.
///
/// Held as a resource by [`crate::assessment::ImpactPlugin`]; replacing it
/// triggers a fresh impact assessment.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidParams {
    /// Diameter in meters.
    pub diameter: f64,
    /// Entry velocity in km/s.
    pub velocity: f64,
    /// Impact angle in degrees from horizontal. Carried for display only.
    pub impact_angle: f64,
}

impl Default for AsteroidParams {
    fn default() -> Self {
        Self {
            diameter: 500.0,
            velocity: 20.0,
            impact_angle: 45.0,
        }
    }
}

impl AsteroidParams {
    /// Create a new parameter set.
    pub fn new(diameter: f64, velocity: f64, impact_angle: f64) -> Self {
        Self {
            diameter,
            velocity,
            impact_angle,
        }
    }

    /// Sphere radius in meters.
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Mass in kilograms, treating the body as a uniform-density sphere.
    pub fn mass(&self) -> f64 {
        asteroid_mass(self.diameter)
    }

    /// Velocity in m/s.
    pub fn velocity_m_per_s(&self) -> f64 {
        self.velocity * METERS_PER_KM
    }
}

/// Mass (kg) of a sphere of the given diameter (m) at [`ASTEROID_DENSITY`].
pub fn asteroid_mass(diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powf(3.0);
    volume * ASTEROID_DENSITY
}

/// Round to a fixed number of decimal places, halves away from zero.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
