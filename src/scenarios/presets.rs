//! Preset asteroid definitions.
//!
//! Sizes and speeds are rounded public estimates, not ephemeris-grade values.

use super::PresetAsteroid;

/// All available presets, in display order.
pub static PRESETS: &[PresetAsteroid] = &[APOPHIS, BENNU, AG5_2011];

/// 99942 Apophis, famous for its 2029 close approach.
pub static APOPHIS: PresetAsteroid = PresetAsteroid {
    id: "apophis",
    name: "Apophis",
    diameter: 370.0,
    velocity: 30.0,
    angle: 45.0,
};

/// 101955 Bennu, OSIRIS-REx sample-return target.
pub static BENNU: PresetAsteroid = PresetAsteroid {
    id: "bennu",
    name: "Bennu",
    diameter: 490.0,
    velocity: 28.0,
    angle: 60.0,
};

/// 2011 AG5, briefly rated for a 2040 impact before follow-up ruled it out.
pub static AG5_2011: PresetAsteroid = PresetAsteroid {
    id: "2011_ag5",
    name: "2011 AG5",
    diameter: 140.0,
    velocity: 25.0,
    angle: 35.0,
};
