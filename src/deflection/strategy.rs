//! Mitigation strategy types and the delta-v each one imparts.
//!
//! Implements the simplified physics for:
//! - Kinetic impactor (DART-style): a single momentum transfer
//! - Gravity tractor: a constant tug for the whole lead time

use serde::{Deserialize, Serialize};

/// Kinetic impactor spacecraft mass (kg).
pub const KINETIC_IMPACTOR_MASS_KG: f64 = 500.0;

/// Kinetic impactor closing speed (m/s).
pub const KINETIC_IMPACTOR_VELOCITY: f64 = 10_000.0;

/// Constant acceleration applied by a gravity tractor (m/s²).
pub const GRAVITY_TRACTOR_ACCELERATION: f64 = 0.0001;

/// Lead time offered to the user before they pick one (years).
pub const DEFAULT_INTERVENTION_YEARS: f64 = 5.0;

/// Which deflection technique is flown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Spacecraft collides with the asteroid and transfers its momentum.
    #[default]
    #[serde(rename = "kinetic")]
    Kinetic,
    /// Spacecraft hovers alongside and pulls the asteroid gravitationally.
    #[serde(rename = "gravity")]
    GravityTractor,
}

impl StrategyKind {
    /// Every strategy, in display order.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Kinetic, StrategyKind::GravityTractor];

    /// Velocity change (m/s) imparted to an asteroid of `asteroid_mass` kg
    /// over `time_to_impact` seconds of lead time.
    pub fn delta_v(&self, asteroid_mass: f64, time_to_impact: f64) -> f64 {
        match self {
            StrategyKind::Kinetic => {
                // Δv = m_impactor × v_impactor / M (no ejecta enhancement)
                let momentum_transfer = KINETIC_IMPACTOR_MASS_KG * KINETIC_IMPACTOR_VELOCITY;
                momentum_transfer / asteroid_mass
            }
            StrategyKind::GravityTractor => {
                // Independent of asteroid mass: the tractor holds station
                GRAVITY_TRACTOR_ACCELERATION * time_to_impact
            }
        }
    }

    /// Chance the mission executes as planned given `years` of lead time.
    pub fn success_probability(&self, years: f64) -> f64 {
        match self {
            StrategyKind::Kinetic => 0.95_f64.min(years * 0.15),
            StrategyKind::GravityTractor => 0.98_f64.min(years * 0.09),
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Kinetic => "Kinetic Impactor",
            StrategyKind::GravityTractor => "Gravity Tractor",
        }
    }

    /// One-line description for a strategy picker.
    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::Kinetic => "Spacecraft collision transfers momentum to the asteroid",
            StrategyKind::GravityTractor => "Spacecraft mass slowly tugs the asteroid off course",
        }
    }
}

/// A chosen strategy plus the lead time available to fly it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationStrategy {
    #[serde(rename = "type")]
    pub kind: StrategyKind,
    /// Years between launch and the predicted impact.
    pub intervention_time: f64,
}

impl Default for MitigationStrategy {
    fn default() -> Self {
        Self::kinetic(DEFAULT_INTERVENTION_YEARS)
    }
}

impl MitigationStrategy {
    pub fn new(kind: StrategyKind, intervention_time: f64) -> Self {
        Self {
            kind,
            intervention_time,
        }
    }

    /// Kinetic impactor with the given lead time (years).
    pub fn kinetic(intervention_time: f64) -> Self {
        Self::new(StrategyKind::Kinetic, intervention_time)
    }

    /// Gravity tractor with the given lead time (years).
    pub fn gravity_tractor(intervention_time: f64) -> Self {
        Self::new(StrategyKind::GravityTractor, intervention_time)
    }

    /// Lead time in seconds, using 365-day years.
    pub fn time_to_impact(&self) -> f64 {
        self.intervention_time * 365.0 * 24.0 * 3600.0
    }

    pub fn success_probability(&self) -> f64 {
        self.kind.success_probability(self.intervention_time)
    }
}
