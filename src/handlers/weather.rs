// src/handlers/weather.rs
// DOCUMENTATION: Weather endpoints
// PURPOSE: Current conditions and daily forecast; always 200 once the query is valid

use super::params;
use crate::config::Config;
use crate::errors::TravelError;
use crate::models::{WeatherQuery, DEFAULT_FORECAST_DAYS, MAX_FORECAST_DAYS};
use crate::services::{Integrations, WeatherService};
use actix_web::{web, HttpResponse, Responder};

/// Coordinates from the query, or the configured default location
/// DOCUMENTATION: A lone lat or lng is not a location; the default pair replaces both
fn coordinates(query: &WeatherQuery, config: &Config) -> Result<(f64, f64), TravelError> {
    let lat = params::latitude("lat", &query.lat)?;
    let lng = params::longitude("lng", &query.lng)?;
    Ok(match (lat, lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => (config.default_lat, config.default_lng),
    })
}

/// GET /api/weather?lat&lng
pub async fn current_weather(
    config: web::Data<Config>,
    integrations: web::Data<Integrations>,
    query: web::Query<WeatherQuery>,
) -> Result<impl Responder, TravelError> {
    let (lat, lng) = coordinates(&query, &config)?;
    let weather = WeatherService::current(&integrations.weather, lat, lng).await;
    Ok(HttpResponse::Ok().json(weather.into_response()))
}

/// GET /api/weather/forecast?lat&lng&days
pub async fn forecast(
    config: web::Data<Config>,
    integrations: web::Data<Integrations>,
    query: web::Query<WeatherQuery>,
) -> Result<impl Responder, TravelError> {
    let (lat, lng) = coordinates(&query, &config)?;
    let days = params::bounded_u32("days", &query.days, 1..=MAX_FORECAST_DAYS)?
        .unwrap_or(DEFAULT_FORECAST_DAYS);

    let forecast = WeatherService::forecast(&integrations.weather, lat, lng, days).await;
    Ok(HttpResponse::Ok().json(forecast.into_response()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/weather")
            .route("", web::get().to(current_weather))
            .route("/forecast", web::get().to(forecast)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    fn app_state() -> (web::Data<Config>, web::Data<Integrations>) {
        let config = Config::for_tests();
        let integrations = Integrations::new(&config).unwrap();
        (web::Data::new(config), web::Data::new(integrations))
    }

    #[actix_web::test]
    async fn test_weather_falls_back_when_api_unreachable() {
        let (config_data, integrations) = app_state();
        let app = test::init_service(
            App::new()
                .app_data(config_data)
                .app_data(integrations)
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/weather?lat=19.076&lng=72.8777")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["source"], "Mock Data");
        assert!(body["note"].is_string());
        assert_eq!(body["data"]["city"], "Location (19.08, 72.88)");
    }

    #[actix_web::test]
    async fn test_missing_coordinates_use_default_location() {
        let (config_data, integrations) = app_state();
        let app = test::init_service(
            App::new()
                .app_data(config_data)
                .app_data(integrations)
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/weather?lat=&lng=").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["city"], "Location (28.61, 77.21)");

        let req = test::TestRequest::get().uri("/api/weather?lat=40").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["city"], "Location (28.61, 77.21)");
    }

    #[actix_web::test]
    async fn test_forecast_days_and_bad_input() {
        let (config_data, integrations) = app_state();
        let app = test::init_service(
            App::new()
                .app_data(config_data)
                .app_data(integrations)
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/weather/forecast?lat=12.97&lng=77.59&days=3")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(3));

        let req = test::TestRequest::get()
            .uri("/api/weather/forecast?days=30")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/weather?lat=abc&lng=77")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
