// src/services/distance_service.rs
// DOCUMENTATION: Road distance with great-circle fallback

use crate::models::{DistanceResult, Sourced};
use crate::services::geo::{estimated_minutes, haversine_km, point};
use crate::services::RoutingClient;

pub const LIVE_SOURCE: &str = "OpenRouteService";
pub const FALLBACK_SOURCE: &str = "Haversine Formula";
const FALLBACK_NOTE: &str = "Approximate straight-line distance";

/// Straight-line distance and a rough driving time
pub fn haversine_estimate(start: (f64, f64), end: (f64, f64)) -> DistanceResult {
    let km = haversine_km(point(start.0, start.1), point(end.0, end.1));
    DistanceResult::km(km, estimated_minutes(km))
}

pub struct DistanceService;

impl DistanceService {
    /// Driving distance between two (lat, lng) pairs
    pub async fn calculate(
        client: &RoutingClient,
        start: (f64, f64),
        end: (f64, f64),
    ) -> Sourced<DistanceResult> {
        match client.driving_distance(start, end).await {
            Ok(result) => Sourced::live(result, LIVE_SOURCE),
            Err(e) => {
                log::warn!("Routing API unavailable ({}), using Haversine distance", e);
                Sourced::fallback(haversine_estimate(start, end), FALLBACK_SOURCE, FALLBACK_NOTE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_haversine_estimate_delhi_mumbai() {
        let result = haversine_estimate((28.6139, 77.2090), (19.0760, 72.8777));
        assert!(result.distance >= 1150.0 && result.distance <= 1160.0);
        assert_eq!(result.unit, "km");
        assert!((1725..=1740).contains(&result.duration));
    }

    #[actix_web::test]
    async fn test_unreachable_api_falls_back() {
        let client = RoutingClient::new(&Config::for_tests()).unwrap();
        let result = DistanceService::calculate(&client, (12.97, 77.59), (13.08, 80.27)).await;
        assert!(result.is_fallback());
        assert_eq!(result.source, FALLBACK_SOURCE);
        assert!(result.data.distance > 0.0);
    }
}
