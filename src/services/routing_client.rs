// src/services/routing_client.rs
// DOCUMENTATION: OpenRouteService directions client
// PURPOSE: Road distance and driving time between two coordinates

use crate::config::{is_configured, Config};
use crate::errors::ExternalApiError;
use crate::models::DistanceResult;
use crate::services::http::{build_client, decode_json, LOOKUP_TIMEOUT};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OrsSegment {
    /// Metres
    distance: f64,
    /// Seconds
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OrsProperties {
    #[serde(default)]
    segments: Vec<OrsSegment>,
}

#[derive(Debug, Deserialize)]
struct OrsFeature {
    properties: OrsProperties,
}

#[derive(Debug, Deserialize)]
struct OrsDirectionsResponse {
    #[serde(default)]
    features: Vec<OrsFeature>,
}

fn first_segment(raw: OrsDirectionsResponse) -> Result<DistanceResult, ExternalApiError> {
    let segment = raw
        .features
        .into_iter()
        .next()
        .and_then(|f| f.properties.segments.into_iter().next())
        .ok_or_else(|| ExternalApiError::Payload("no route found".to_string()))?;

    let minutes = (segment.duration / 60.0).ceil().max(0.0) as u32;
    Ok(DistanceResult::km(segment.distance / 1000.0, minutes))
}

pub struct RoutingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl RoutingClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(LOOKUP_TIMEOUT)?,
            api_key: config.openrouteservice_api_key.clone(),
            base_url: config.openrouteservice_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Driving route between two points
    /// DOCUMENTATION: OpenRouteService expects "lng,lat" pairs
    pub async fn driving_distance(
        &self,
        (start_lat, start_lng): (f64, f64),
        (end_lat, end_lng): (f64, f64),
    ) -> Result<DistanceResult, ExternalApiError> {
        if !is_configured(&self.api_key) {
            return Err(ExternalApiError::MissingApiKey);
        }

        let response = self
            .client
            .get(format!("{}/v2/directions/driving-car", self.base_url))
            .query(&[
                ("api_key", self.api_key.clone()),
                ("start", format!("{},{}", start_lng, start_lat)),
                ("end", format!("{},{}", end_lng, end_lat)),
            ])
            .send()
            .await?;

        let raw: OrsDirectionsResponse = decode_json("OpenRouteService", response).await?;
        first_segment(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_segment_converts_units() {
        let raw: OrsDirectionsResponse = serde_json::from_value(json!({
            "features": [{
                "properties": { "segments": [{ "distance": 1421345.6, "duration": 91234.0 }] }
            }]
        }))
        .unwrap();

        let result = first_segment(raw).unwrap();
        assert_eq!(result.distance, 1421.35);
        assert_eq!(result.duration, 1521);
    }

    #[test]
    fn test_empty_route_is_an_error() {
        let raw: OrsDirectionsResponse = serde_json::from_value(json!({ "features": [] })).unwrap();
        assert!(matches!(first_segment(raw), Err(ExternalApiError::Payload(_))));
    }

    #[test]
    fn test_blank_key_skips_request() {
        let mut config = Config::for_tests();
        config.openrouteservice_api_key = String::new();
        let client = RoutingClient::new(&config).unwrap();

        let result = tokio_test::block_on(client.driving_distance((1.0, 2.0), (3.0, 4.0)));
        assert!(matches!(result, Err(ExternalApiError::MissingApiKey)));
    }
}
