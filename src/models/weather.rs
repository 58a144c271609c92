// src/models/weather.rs
// DOCUMENTATION: Normalized weather payloads
// PURPOSE: One shape for both live OpenWeatherMap data and generated fallback data

use serde::{Deserialize, Serialize};

pub const DEFAULT_FORECAST_DAYS: u32 = 5;
pub const MAX_FORECAST_DAYS: u32 = 16;

/// Current conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    /// Degrees Celsius, rounded
    pub temperature: i32,
    pub feels_like: i32,
    pub description: String,
    pub icon: String,
    /// Percent
    pub humidity: u32,
    /// Metres per second
    pub wind_speed: f64,
    /// Degrees from north
    pub wind_direction: u32,
    /// hPa
    pub pressure: u32,
    /// Kilometres
    pub visibility: f64,
    /// Percent cloud cover
    pub cloudiness: u32,
    pub city: String,
    pub country: String,
    pub coordinates: WeatherCoordinates,
}

/// OpenWeatherMap reports `lon`, so the weather payload keeps that name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherCoordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One day of a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Display label, e.g. "Mon, Jan 6"
    pub date: String,
    /// Unix seconds
    pub timestamp: i64,
    pub temperature: i32,
    pub feels_like: i32,
    pub description: String,
    pub icon: String,
    pub humidity: u32,
    pub wind_speed: f64,
    pub pressure: u32,
}

/// Raw query parameters for the weather endpoints
/// DOCUMENTATION: Kept as strings so empty values count as absent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub days: Option<String>,
}

/// Label used by the forecast, e.g. "Mon, Jan 6"
pub fn forecast_label(date: chrono::NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// City name used when no better name is known
pub fn location_label(lat: f64, lng: f64) -> String {
    format!("Location ({:.2}, {:.2})", lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_forecast_label_format() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(forecast_label(date), "Mon, Jan 6");
    }

    #[test]
    fn test_location_label_rounds_to_two_places() {
        assert_eq!(location_label(28.6139, 77.209), "Location (28.61, 77.21)");
    }

    #[test]
    fn test_current_weather_serializes_camel_case() {
        let weather = CurrentWeather {
            temperature: 21,
            feels_like: 20,
            description: "clear sky".into(),
            icon: "01d".into(),
            humidity: 50,
            wind_speed: 3.2,
            wind_direction: 90,
            pressure: 1012,
            visibility: 10.0,
            cloudiness: 0,
            city: "Delhi".into(),
            country: "IN".into(),
            coordinates: WeatherCoordinates { lat: 28.61, lon: 77.21 },
        };
        let value = serde_json::to_value(&weather).unwrap();
        assert_eq!(value["feelsLike"], 20);
        assert_eq!(value["windSpeed"], 3.2);
        assert_eq!(value["coordinates"]["lon"], 77.21);
    }
}
