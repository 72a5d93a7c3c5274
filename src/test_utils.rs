//! Test utilities for impact and deflection tests.
//!
//! Provides fixtures for common asteroid and mission setups and assertions
//! for the fixed-precision output contract.

use crate::deflection::MitigationStrategy;
use crate::types::AsteroidParams;

/// Fixtures for creating test inputs.
pub mod fixtures {
    use super::*;

    /// Asteroid with the given size and speed, 45° entry.
    pub fn asteroid(diameter: f64, velocity: f64) -> AsteroidParams {
        AsteroidParams::new(diameter, velocity, 45.0)
    }

    /// Gravity tractor with enough lead time to clear Earth for any asteroid
    /// slower than 70 km/s.
    pub fn long_tractor() -> MitigationStrategy {
        MitigationStrategy::gravity_tractor(15.0)
    }

    /// Both strategies at the same lead time.
    pub fn both_strategies(years: f64) -> [MitigationStrategy; 2] {
        [
            MitigationStrategy::kinetic(years),
            MitigationStrategy::gravity_tractor(years),
        ]
    }
}

/// Assertions for output precision.
pub mod assertions {
    /// True if `value` has no digits past `decimals` places
    /// (it survives another round at that precision unchanged).
    pub fn is_rounded_to(value: f64, decimals: i32) -> bool {
        let scale = 10f64.powi(decimals);
        (value * scale).round() / scale == value
    }

    /// Panic unless `value` is already rounded to `decimals` places.
    pub fn assert_rounded_to(value: f64, decimals: i32) {
        assert!(
            is_rounded_to(value, decimals),
            "{value} is not rounded to {decimals} decimal places"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rounded_to() {
        assert!(assertions::is_rounded_to(12.34, 2));
        assert!(assertions::is_rounded_to(12.0, 1));
        assert!(!assertions::is_rounded_to(12.345, 2));
    }

    #[test]
    fn test_long_tractor_clears_fastest_asteroid() {
        let estimate = crate::deflection::estimate_deflection(
            &fixtures::asteroid(1000.0, 70.0),
            &fixtures::long_tractor(),
        );
        assert!(estimate.clears_earth(), "miss distance {}", estimate.miss_distance);
    }
}
