//! Bevy integration for the impact and deflection models.
//!
//! A presentation layer (map, sliders, 3D trajectory view) writes the input
//! resources and reads the output resources; it never reimplements a formula.
//!
//! Inputs: [`AsteroidParams`], [`ImpactSite`], [`MitigationPlan`].
//! Outputs: [`ImpactAssessment`], [`DeflectionOutcome`].

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deflection::{simulate_deflection_with_rng, DeflectionResult, MitigationStrategy};
use crate::impact::{compute_impact, ImpactMetrics};
use crate::location::ImpactSite;
use crate::types::AsteroidParams;
use crate::validation::ParameterLimits;

/// Seed used when no explicit seed is configured.
pub const DEFAULT_RNG_SEED: u64 = 0x1A57_E201;

/// Latest impact estimate. `None` until a site is selected or while the
/// inputs are invalid.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct ImpactAssessment {
    pub metrics: Option<ImpactMetrics>,
    /// Ocean classification of the site the metrics were computed for.
    pub is_ocean: bool,
}

/// Mitigation mission the user asked to simulate.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct MitigationPlan(pub Option<MitigationStrategy>);

/// Result of the most recent deflection simulation.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct DeflectionOutcome(pub Option<DeflectionResult>);

/// Random source for mission success draws.
///
/// Owned by the app so every draw goes through `ResMut`, which keeps the
/// sequence reproducible for a given seed.
#[derive(Resource, Clone, Debug)]
pub struct DeflectionRng(pub ChaCha8Rng);

impl DeflectionRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for DeflectionRng {
    fn default() -> Self {
        Self::from_seed(DEFAULT_RNG_SEED)
    }
}

/// Plugin wiring the calculators into the app.
///
/// Resources already inserted by the caller (for example a seeded
/// [`DeflectionRng`] or custom [`ParameterLimits`]) are kept.
pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AsteroidParams>()
            .init_resource::<ImpactSite>()
            .init_resource::<ImpactAssessment>()
            .init_resource::<MitigationPlan>()
            .init_resource::<DeflectionOutcome>()
            .init_resource::<DeflectionRng>()
            .init_resource::<ParameterLimits>()
            .add_systems(Update, (assess_impact, simulate_mitigation));
    }
}

/// Recompute the impact estimate when the asteroid or the site changes.
fn assess_impact(
    params: Res<AsteroidParams>,
    site: Res<ImpactSite>,
    limits: Res<ParameterLimits>,
    mut assessment: ResMut<ImpactAssessment>,
) {
    if !params.is_changed() && !site.is_changed() && !limits.is_changed() {
        return;
    }

    let Some(point) = site.0 else {
        if assessment.metrics.is_some() {
            *assessment = ImpactAssessment::default();
        }
        return;
    };

    if let Err(err) = limits.validate_asteroid(&params) {
        warn!("Cannot assess impact: {}", err);
        *assessment = ImpactAssessment::default();
        return;
    }

    let is_ocean = point.is_ocean();
    let metrics = compute_impact(&params, is_ocean);

    info!(
        "Impact at ({:.2}, {:.2}) [{}]: {} Mt, crater {} km, M{}, {} people affected",
        point.lat,
        point.lng,
        if is_ocean { "ocean" } else { "land" },
        metrics.energy,
        metrics.crater_diameter,
        metrics.seismic_magnitude,
        metrics.affected_population
    );
    if let Some(height) = metrics.tsunami_height {
        info!("Tsunami warning: estimated wave height {} m", height);
    }

    *assessment = ImpactAssessment {
        metrics: Some(metrics),
        is_ocean,
    };
}

/// Run the deflection model when the plan or the asteroid changes.
fn simulate_mitigation(
    params: Res<AsteroidParams>,
    plan: Res<MitigationPlan>,
    limits: Res<ParameterLimits>,
    mut rng: ResMut<DeflectionRng>,
    mut outcome: ResMut<DeflectionOutcome>,
) {
    if !params.is_changed() && !plan.is_changed() && !limits.is_changed() {
        return;
    }

    let Some(strategy) = plan.0 else {
        if outcome.0.is_some() {
            outcome.0 = None;
        }
        return;
    };

    let validation = limits
        .validate_asteroid(&params)
        .and_then(|()| limits.validate_strategy(&strategy));
    if let Err(err) = validation {
        warn!("Cannot simulate {}: {}", strategy.kind.name(), err);
        outcome.0 = None;
        return;
    }

    let result = simulate_deflection_with_rng(&params, &strategy, &mut rng.0);

    info!(
        "{} with {} years lead time: {} (angle {}°, miss distance {} km)",
        strategy.kind.name(),
        strategy.intervention_time,
        result.new_trajectory,
        result.deflection_angle,
        result.miss_distance
    );

    outcome.0 = Some(result);
}
