// src/models/distance.rs
// DOCUMENTATION: Distance calculation request and result

use serde::{Deserialize, Serialize};

/// Query for GET /api/distance/calculate
/// DOCUMENTATION: All four values are required; they stay strings until the handler parses them
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceQuery {
    pub start_lat: Option<String>,
    pub start_lng: Option<String>,
    pub end_lat: Option<String>,
    pub end_lng: Option<String>,
}

/// Road or straight-line distance between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    /// Kilometres, two decimal places
    pub distance: f64,
    /// Minutes
    pub duration: u32,
    pub unit: &'static str,
}

impl DistanceResult {
    pub fn km(distance_km: f64, duration_minutes: u32) -> Self {
        Self {
            distance: (distance_km * 100.0).round() / 100.0,
            duration: duration_minutes,
            unit: "km",
        }
    }
}
