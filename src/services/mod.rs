// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Third-party API clients, fallback generators and the services that combine them

pub mod ai_service;
pub mod distance_service;
pub mod fallback;
pub mod flight_client;
pub mod gemini_client;
pub mod geo;
pub mod http;
pub mod routing_client;
pub mod transport_service;
pub mod weather_client;
pub mod weather_service;

pub use ai_service::AiService;
pub use distance_service::DistanceService;
pub use flight_client::FlightClient;
pub use gemini_client::GeminiClient;
pub use routing_client::RoutingClient;
pub use transport_service::TransportService;
pub use weather_client::WeatherClient;
pub use weather_service::WeatherService;

use crate::config::Config;

/// Every third-party client, built once at startup and shared by all workers
pub struct Integrations {
    pub weather: WeatherClient,
    pub routing: RoutingClient,
    pub flights: FlightClient,
    pub gemini: GeminiClient,
}

impl Integrations {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            weather: WeatherClient::new(config)?,
            routing: RoutingClient::new(config)?,
            flights: FlightClient::new(config)?,
            gemini: GeminiClient::new(config)?,
        })
    }
}
