//! Preset asteroids for quick selection.
//!
//! Provides a small catalogue of well-known near-Earth objects that a
//! parameter panel can offer next to its sliders.

pub mod presets;

use serde::Serialize;

use crate::types::AsteroidParams;

pub use presets::PRESETS;

/// A named, predefined asteroid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PresetAsteroid {
    /// Unique identifier for the preset.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Diameter (m).
    pub diameter: f64,
    /// Entry velocity (km/s).
    pub velocity: f64,
    /// Impact angle (degrees).
    pub angle: f64,
}

impl PresetAsteroid {
    /// Parameters to load into the calculator.
    pub fn params(&self) -> AsteroidParams {
        AsteroidParams::new(self.diameter, self.velocity, self.angle)
    }
}

/// Get a preset by ID.
pub fn get_preset(id: &str) -> Option<&'static PresetAsteroid> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Get a preset by display name, ignoring case.
pub fn find_preset_by_name(name: &str) -> Option<&'static PresetAsteroid> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
