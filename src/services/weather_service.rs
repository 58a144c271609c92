// src/services/weather_service.rs
// DOCUMENTATION: Weather lookups with generated fallback
// PURPOSE: Try OpenWeatherMap, otherwise serve deterministic mock weather

use crate::models::{CurrentWeather, ForecastDay, Sourced};
use crate::services::fallback;
use crate::services::WeatherClient;
use chrono::Utc;

pub const LIVE_SOURCE: &str = "OpenWeatherMap";
pub const FALLBACK_SOURCE: &str = "Mock Data";
const FALLBACK_NOTE: &str = "Using mock data due to API unavailability";

pub struct WeatherService;

impl WeatherService {
    /// Current conditions at a coordinate
    pub async fn current(client: &WeatherClient, lat: f64, lng: f64) -> Sourced<CurrentWeather> {
        match client.current(lat, lng).await {
            Ok(weather) => Sourced::live(weather, LIVE_SOURCE),
            Err(e) => {
                log::warn!("Weather API unavailable ({}), serving mock weather", e);
                let today = Utc::now().date_naive();
                Sourced::fallback(
                    fallback::weather::current_weather(lat, lng, today),
                    FALLBACK_SOURCE,
                    FALLBACK_NOTE,
                )
            }
        }
    }

    /// Daily forecast starting today
    pub async fn forecast(
        client: &WeatherClient,
        lat: f64,
        lng: f64,
        days: u32,
    ) -> Sourced<Vec<ForecastDay>> {
        match client.forecast(lat, lng, days).await {
            Ok(forecast) => Sourced::live(forecast, LIVE_SOURCE),
            Err(e) => {
                log::warn!("Forecast API unavailable ({}), serving mock forecast", e);
                let today = Utc::now().date_naive();
                Sourced::fallback(
                    fallback::weather::forecast(lat, lng, today, days),
                    FALLBACK_SOURCE,
                    FALLBACK_NOTE,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[actix_web::test]
    async fn test_unreachable_api_falls_back() {
        let client = WeatherClient::new(&Config::for_tests()).unwrap();

        let current = WeatherService::current(&client, 28.6139, 77.2090).await;
        assert!(current.is_fallback());
        assert_eq!(current.source, FALLBACK_SOURCE);
        assert_eq!(current.data.city, "Location (28.61, 77.21)");

        let forecast = WeatherService::forecast(&client, 28.6139, 77.2090, 7).await;
        assert!(forecast.is_fallback());
        assert_eq!(forecast.data.len(), 7);
    }
}
