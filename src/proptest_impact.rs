//! Property-based tests for the impact and deflection models using proptest.
//!
//! These tests verify the output contract across the whole slider range of
//! asteroid sizes, speeds and lead times.

use proptest::prelude::*;

use crate::deflection::{estimate_deflection, simulate_deflection, Trajectory};
use crate::impact::{compute_impact, impact_energy_megatons};
use crate::location::is_ocean_location;
use crate::test_utils::{assertions, fixtures};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every positive input yields positive, finite headline figures.
    #[test]
    fn prop_metrics_positive_and_finite(
        diameter in 1.0f64..5000.0,
        velocity in 1.0f64..100.0,
        is_ocean in any::<bool>(),
    ) {
        let metrics = compute_impact(&fixtures::asteroid(diameter, velocity), is_ocean);

        prop_assert!(metrics.energy >= 0.0);
        prop_assert!(metrics.crater_diameter >= 0.0);
        prop_assert!(metrics.seismic_magnitude.is_finite());
        prop_assert!(impact_energy_megatons(&fixtures::asteroid(diameter, velocity)) > 0.0);
    }

    /// Fixed-precision outputs carry no digits beyond their precision.
    #[test]
    fn prop_outputs_rounded(
        diameter in 100.0f64..1000.0,
        velocity in 10.0f64..70.0,
    ) {
        let metrics = compute_impact(&fixtures::asteroid(diameter, velocity), true);

        assertions::assert_rounded_to(metrics.energy, 2);
        assertions::assert_rounded_to(metrics.crater_diameter, 1);
        assertions::assert_rounded_to(metrics.seismic_magnitude, 1);
        if let Some(height) = metrics.tsunami_height {
            assertions::assert_rounded_to(height, 1);
        }
    }

    /// Larger asteroids at the same speed are strictly worse.
    #[test]
    fn prop_monotonic_in_diameter(
        diameter in 100.0f64..1000.0,
        growth in 1.05f64..2.0,
        velocity in 10.0f64..70.0,
    ) {
        let small_params = fixtures::asteroid(diameter, velocity);
        let large_params = fixtures::asteroid(diameter * growth, velocity);
        let small = compute_impact(&small_params, false);
        let large = compute_impact(&large_params, false);

        prop_assert!(large_params.mass() > small_params.mass());
        prop_assert!(large.energy > small.energy);
        prop_assert!(large.crater_diameter > small.crater_diameter);
        prop_assert!(large.affected_population > small.affected_population);
    }

    /// The tsunami height is present exactly when there is a tsunami risk.
    #[test]
    fn prop_tsunami_height_iff_risk(
        diameter in 50.0f64..1000.0,
        velocity in 10.0f64..70.0,
        is_ocean in any::<bool>(),
    ) {
        let metrics = compute_impact(&fixtures::asteroid(diameter, velocity), is_ocean);

        prop_assert_eq!(metrics.tsunami_risk, is_ocean && diameter > 200.0);
        prop_assert_eq!(metrics.tsunami_height.is_some(), metrics.tsunami_risk);
        if let Some(height) = metrics.tsunami_height {
            prop_assert!(height > 0.0);
        }
    }

    /// A draw at the very top of the unit interval never succeeds.
    #[test]
    fn prop_high_draw_never_succeeds(
        diameter in 100.0f64..1000.0,
        velocity in 10.0f64..70.0,
        years in 1.0f64..100.0,
    ) {
        let params = fixtures::asteroid(diameter, velocity);
        for strategy in fixtures::both_strategies(years) {
            let result = simulate_deflection(&params, &strategy, 0.999_999);
            prop_assert!(!result.success);
            prop_assert_eq!(result.new_trajectory, Trajectory::InsufficientDeflection);
        }
    }

    /// With a zero draw, success is decided by geometry alone.
    #[test]
    fn prop_zero_draw_follows_geometry(
        diameter in 100.0f64..1000.0,
        velocity in 10.0f64..70.0,
        years in 1.0f64..30.0,
    ) {
        let params = fixtures::asteroid(diameter, velocity);
        for strategy in fixtures::both_strategies(years) {
            let estimate = estimate_deflection(&params, &strategy);
            let result = estimate.resolve(0.0);
            prop_assert_eq!(result.success, estimate.clears_earth());
            assertions::assert_rounded_to(result.deflection_angle, 3);
            prop_assert!(result.deflection_angle >= 0.0 && result.deflection_angle <= 90.0);
        }
    }

    /// Identical inputs give identical outputs.
    #[test]
    fn prop_idempotent(
        diameter in 100.0f64..1000.0,
        velocity in 10.0f64..70.0,
        years in 1.0f64..15.0,
        draw in 0.0f64..1.0,
        is_ocean in any::<bool>(),
    ) {
        let params = fixtures::asteroid(diameter, velocity);
        prop_assert_eq!(compute_impact(&params, is_ocean), compute_impact(&params, is_ocean));
        for strategy in fixtures::both_strategies(years) {
            prop_assert_eq!(
                simulate_deflection(&params, &strategy, draw),
                simulate_deflection(&params, &strategy, draw)
            );
        }
    }

    /// Everything outside the central band is ocean, at any latitude.
    #[test]
    fn prop_outer_longitudes_are_ocean(
        lat in -90.0f64..=90.0,
        lng in 30.0f64..=180.0,
    ) {
        prop_assert!(is_ocean_location(lat, lng));
        prop_assert!(is_ocean_location(lat, -lng));
    }

    /// North of the South Atlantic band, the central longitudes are land.
    #[test]
    fn prop_central_band_north_is_land(
        lat in -29.9f64..=90.0,
        lng in -29.9f64..29.9,
    ) {
        prop_assert!(!is_ocean_location(lat, lng));
    }
}
