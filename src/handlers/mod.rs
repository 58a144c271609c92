// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export route configuration for each endpoint group

pub mod ai;
pub mod distance;
pub mod health;
pub mod hotels;
pub mod params;
pub mod places;
pub mod restaurants;
pub mod transport;
pub mod trips;
pub mod weather;

pub use ai::config as ai_config;
pub use distance::config as distance_config;
pub use health::config as health_config;
pub use health::Uptime;
pub use hotels::config as hotels_config;
pub use places::config as places_config;
pub use restaurants::config as restaurants_config;
pub use transport::config as transport_config;
pub use trips::config as trips_config;
pub use weather::config as weather_config;

use crate::errors::TravelError;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": format!("Route {} not found", req.path())
    }))
}

/// Malformed JSON bodies and query strings are client errors
pub fn bad_request<E: std::fmt::Display>(err: E, _req: &HttpRequest) -> actix_web::Error {
    TravelError::InvalidInput(err.to_string()).into()
}

/// Path segments that fail to parse (e.g. a non-UUID id) name nothing that exists
pub fn path_not_found<E: std::fmt::Display>(err: E, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Unmatched path parameter: {}", err);
    TravelError::NotFound("Resource".to_string()).into()
}
