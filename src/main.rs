//! Impactor - Asteroid Impact & Deflection Calculator
//!
//! Headless runner: loads the default asteroid, assesses an Atlantic impact
//! and simulates both deflection strategies, logging every result.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use impactor::deflection::strategy::DEFAULT_INTERVENTION_YEARS;
use impactor::scenarios::PRESETS;
use impactor::{
    compute_impact, simulate_deflection_with_rng, AsteroidParams, DeflectionRng, GeoPoint,
    ImpactPlugin, ImpactSite, MitigationPlan, MitigationStrategy, StrategyKind,
};

/// Mid-Atlantic impact site used for the demonstration run.
const DEMO_SITE: (f64, f64) = (25.0, -40.0);

fn main() {
    let site = match GeoPoint::new(DEMO_SITE.0, DEMO_SITE.1) {
        Ok(point) => point,
        Err(err) => {
            eprintln!("invalid demo site: {err}");
            return;
        }
    };

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_once()),
            LogPlugin::default(),
        ))
        .insert_resource(AsteroidParams::default())
        .insert_resource(ImpactSite(Some(site)))
        .insert_resource(MitigationPlan(Some(MitigationStrategy::gravity_tractor(
            DEFAULT_INTERVENTION_YEARS,
        ))))
        .add_plugins(ImpactPlugin)
        .add_systems(Startup, survey_presets)
        .run();
}

/// Log how each preset asteroid fares at the demo site.
fn survey_presets(mut rng: ResMut<DeflectionRng>, site: Res<ImpactSite>) {
    let Some(point) = site.0 else {
        return;
    };
    let is_ocean = point.is_ocean();

    for preset in PRESETS {
        let params = preset.params();
        let metrics = compute_impact(&params, is_ocean);
        info!(
            "{}: {} Mt, crater {} km, tsunami {}",
            preset.name,
            metrics.energy,
            metrics.crater_diameter,
            metrics
                .tsunami_height
                .map_or_else(|| "none".to_string(), |h| format!("{h} m"))
        );

        for kind in StrategyKind::ALL {
            let strategy = MitigationStrategy::new(kind, DEFAULT_INTERVENTION_YEARS);
            let result = simulate_deflection_with_rng(&params, &strategy, &mut rng.0);
            info!(
                "  {}: {} ({} km)",
                kind.name(),
                result.new_trajectory,
                result.miss_distance
            );
        }
    }
}
