//! Impact consequence estimates.
//!
//! Closed-form approximations chosen for interactivity rather than accuracy:
//! - Kinetic energy of a uniform-density sphere, reported in megatons of TNT
//! - Crater diameter and damage radius as power laws of that energy
//! - A Richter-like seismic magnitude
//! - Population within the damage radius at a flat global density
//! - Tsunami height for large ocean impacts

use serde::{Deserialize, Serialize};

use crate::types::{round_to_decimals, AsteroidParams, JOULES_PER_MEGATON, METERS_PER_KM};

/// Average population density assumed inside the damage radius (people/km²).
pub const POPULATION_DENSITY_PER_KM2: f64 = 58.0;

/// Asteroids at or below this diameter (m) never raise a tsunami warning.
pub const TSUNAMI_MIN_DIAMETER: f64 = 200.0;

/// Estimated consequences of a single impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    /// Megatons of TNT, 2 decimals.
    pub energy: f64,
    /// Kilometers, 1 decimal.
    pub crater_diameter: f64,
    /// Richter-like magnitude, 1 decimal.
    pub seismic_magnitude: f64,
    /// People inside the damage radius.
    pub affected_population: u64,
    pub tsunami_risk: bool,
    /// Wave height in meters, 1 decimal. `None` when no tsunami is expected,
    /// which is distinct from a zero-height wave.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsunami_height: Option<f64>,
}

/// Kinetic energy of the asteroid in megatons of TNT, unrounded.
pub fn impact_energy_megatons(params: &AsteroidParams) -> f64 {
    let velocity = params.velocity_m_per_s();
    let kinetic_energy = 0.5 * params.mass() * velocity.powf(2.0);
    kinetic_energy / JOULES_PER_MEGATON
}

/// Estimate the consequences of `params` striking a point that is
/// (`is_ocean`) or is not open ocean.
///
/// Requires `diameter > 0` and `velocity > 0`; other inputs produce
/// meaningless (NaN or infinite) figures rather than an error.
pub fn compute_impact(params: &AsteroidParams, is_ocean: bool) -> ImpactMetrics {
    let energy = impact_energy_megatons(params);

    let crater_diameter = energy.powf(0.25) * 1.8;
    let seismic_magnitude = 0.67 * energy.log10() + 5.87;

    let damage_radius = energy.powf(0.33) * 50.0;
    let affected_area = std::f64::consts::PI * damage_radius.powf(2.0);
    let affected_population = (affected_area * POPULATION_DENSITY_PER_KM2).floor() as u64;

    let tsunami_risk = is_ocean && params.diameter > TSUNAMI_MIN_DIAMETER;
    let tsunami_height = tsunami_risk.then(|| round_to_decimals(energy.powf(0.2) * 15.0, 1));

    ImpactMetrics {
        energy: round_to_decimals(energy, 2),
        crater_diameter: round_to_decimals(crater_diameter, 1),
        seismic_magnitude: round_to_decimals(seismic_magnitude, 1),
        affected_population,
        tsunami_risk,
        tsunami_height,
    }
}

/// Severity band drawn around the impact point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageZoneKind {
    /// The crater itself.
    Crater,
    /// Heavy structural damage.
    Severe,
    /// Broken windows, light damage.
    Moderate,
}

impl DamageZoneKind {
    /// Every band, innermost first.
    pub const ALL: [DamageZoneKind; 3] = [
        DamageZoneKind::Crater,
        DamageZoneKind::Severe,
        DamageZoneKind::Moderate,
    ];

    /// Ring radius as a multiple of the crater radius.
    pub fn radius_multiplier(&self) -> f64 {
        match self {
            DamageZoneKind::Crater => 1.0,
            DamageZoneKind::Severe => 3.0,
            DamageZoneKind::Moderate => 6.0,
        }
    }

    /// Suggested overlay color (hex RGB).
    pub fn color(&self) -> &'static str {
        match self {
            DamageZoneKind::Crater => "#ef4444",
            DamageZoneKind::Severe => "#f97316",
            DamageZoneKind::Moderate => "#fbbf24",
        }
    }
}

/// Concentric ring to draw on a map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageZone {
    pub kind: DamageZoneKind,
    /// Ring radius in meters.
    pub radius_m: f64,
}

impl ImpactMetrics {
    /// Crater radius in meters, from the rounded crater diameter.
    pub fn crater_radius_m(&self) -> f64 {
        self.crater_diameter / 2.0 * METERS_PER_KM
    }

    /// Map overlay rings, innermost first.
    pub fn damage_zones(&self) -> [DamageZone; 3] {
        let crater_radius = self.crater_radius_m();
        DamageZoneKind::ALL.map(|kind| DamageZone {
            kind,
            radius_m: crater_radius * kind.radius_multiplier(),
        })
    }
}
