//! Coarse ocean/land classification for impact sites.
//!
//! There is no coastline dataset behind this: three fixed latitude/longitude
//! rectangles stand in for the ocean-dominant parts of the globe (the
//! Americas' oceans, the Indo-Pacific, and the South Atlantic band).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{check_coordinates, ParameterError};

/// Point on the globe, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point, rejecting coordinates outside
    /// lat ∈ [-90, 90], lng ∈ [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, ParameterError> {
        check_coordinates(lat, lng)?;
        Ok(Self { lat, lng })
    }

    pub fn is_ocean(&self) -> bool {
        is_ocean_location(self.lat, self.lng)
    }
}

/// Axis-aligned lat/lng rectangle, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OceanRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl OceanRegion {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Regions treated as open ocean.
pub static OCEAN_REGIONS: [OceanRegion; 3] = [
    // Everything west of 30°W
    OceanRegion {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lng: -180.0,
        max_lng: -30.0,
    },
    // Everything east of 30°E
    OceanRegion {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lng: 30.0,
        max_lng: 180.0,
    },
    // South Atlantic below Africa
    OceanRegion {
        min_lat: -60.0,
        max_lat: -30.0,
        min_lng: -30.0,
        max_lng: 30.0,
    },
];

/// Whether `(lat, lng)` falls inside any ocean region.
///
/// Total over all inputs: out-of-range or NaN coordinates are simply land.
pub fn is_ocean_location(lat: f64, lng: f64) -> bool {
    OCEAN_REGIONS.iter().any(|region| region.contains(lat, lng))
}

/// Currently selected impact site, if any.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactSite(pub Option<GeoPoint>);
