// src/services/geo.rs
// DOCUMENTATION: Great-circle distance and road-time estimate
// PURPOSE: Offline distance used when the routing API is unavailable

use geo_types::Point;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average road speed assumed by the travel-time estimate
const AVERAGE_SPEED_KMH: f64 = 60.0;

/// Extra minutes per kilometre for traffic and stops
const BUFFER_MINUTES_PER_KM: f64 = 0.5;

/// Build a point from latitude/longitude (x = longitude, y = latitude)
pub fn point(lat: f64, lng: f64) -> Point<f64> {
    Point::new(lng, lat)
}

/// Haversine distance between two points in kilometres
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let lat1 = from.y().to_radians();
    let lat2 = to.y().to_radians();
    let d_lat = (to.y() - from.y()).to_radians();
    let d_lng = (to.x() - from.x()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimated driving time in whole minutes
/// DOCUMENTATION: distance at 60 km/h plus half a minute per km, rounded up
pub fn estimated_minutes(distance_km: f64) -> u32 {
    let base = distance_km / AVERAGE_SPEED_KMH * 60.0;
    let buffer = distance_km * BUFFER_MINUTES_PER_KM;
    (base + buffer).max(0.0).ceil() as u32
}
