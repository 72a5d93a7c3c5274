//! Common test utilities for integration tests.

#![allow(dead_code)]

use impactor::{AsteroidParams, GeoPoint, MitigationStrategy};

/// Asteroid with the given size and speed, 45° entry.
pub fn asteroid(diameter: f64, velocity: f64) -> AsteroidParams {
    AsteroidParams::new(diameter, velocity, 45.0)
}

/// Point in the Pacific.
pub fn pacific() -> GeoPoint {
    GeoPoint::new(0.0, -140.0).expect("valid coordinates")
}

/// Point in central Africa.
pub fn africa() -> GeoPoint {
    GeoPoint::new(5.0, 20.0).expect("valid coordinates")
}

/// Lead times covering the slider range of both strategies (years).
pub fn lead_times() -> impl Iterator<Item = f64> {
    (1..=15).map(f64::from)
}

/// Both strategies at the same lead time.
pub fn both_strategies(years: f64) -> [MitigationStrategy; 2] {
    [
        MitigationStrategy::kinetic(years),
        MitigationStrategy::gravity_tractor(years),
    ]
}
