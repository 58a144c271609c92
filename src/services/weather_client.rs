// src/services/weather_client.rs
// DOCUMENTATION: OpenWeatherMap API client
// PURPOSE: Fetch current conditions and the 5-day/3-hour forecast, normalized to our shapes

use crate::config::{is_configured, Config};
use crate::errors::ExternalApiError;
use crate::models::{forecast_label, location_label, CurrentWeather, ForecastDay, WeatherCoordinates};
use crate::services::http::{build_client, decode_json, LOOKUP_TIMEOUT};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

/// The forecast endpoint returns one sample every 3 hours
const SAMPLES_PER_DAY: usize = 8;

#[derive(Debug, Default, Deserialize)]
struct OwmMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<u32>,
    pressure: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwmWind {
    speed: Option<f64>,
    deg: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmCoord {
    lat: f64,
    lon: f64,
}

/// Response of GET /weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    #[serde(default)]
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    #[serde(default)]
    wind: OwmWind,
    /// Metres
    visibility: Option<f64>,
    clouds: Option<OwmClouds>,
    name: Option<String>,
    sys: Option<OwmSys>,
    coord: Option<OwmCoord>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    #[serde(default)]
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    #[serde(default)]
    wind: OwmWind,
}

/// Response of GET /forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

fn condition(weather: &[OwmCondition]) -> (String, String) {
    let first = weather.first();
    (
        first
            .and_then(|c| c.description.clone())
            .unwrap_or_else(|| "Partly cloudy".to_string()),
        first
            .and_then(|c| c.icon.clone())
            .unwrap_or_else(|| "02d".to_string()),
    )
}

fn round_temp(value: Option<f64>) -> i32 {
    value.unwrap_or(20.0).round() as i32
}

fn normalize_current(raw: OwmCurrentResponse, lat: f64, lng: f64) -> CurrentWeather {
    let (description, icon) = condition(&raw.weather);
    let coordinates = raw
        .coord
        .map(|c| WeatherCoordinates { lat: c.lat, lon: c.lon })
        .unwrap_or(WeatherCoordinates { lat, lon: lng });

    CurrentWeather {
        temperature: round_temp(raw.main.temp),
        feels_like: round_temp(raw.main.feels_like),
        description,
        icon,
        humidity: raw.main.humidity.unwrap_or(50),
        wind_speed: raw.wind.speed.unwrap_or(5.0),
        wind_direction: raw.wind.deg.unwrap_or(0),
        pressure: raw.main.pressure.unwrap_or(1013),
        visibility: raw.visibility.unwrap_or(10_000.0) / 1000.0,
        cloudiness: raw.clouds.and_then(|c| c.all).unwrap_or(40),
        city: raw
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| location_label(lat, lng)),
        country: raw
            .sys
            .and_then(|s| s.country)
            .unwrap_or_else(|| "Unknown".to_string()),
        coordinates,
    }
}

/// One entry per day: every 8th 3-hour sample
fn normalize_forecast(raw: OwmForecastResponse, days: usize) -> Vec<ForecastDay> {
    raw.list
        .into_iter()
        .step_by(SAMPLES_PER_DAY)
        .take(days)
        .filter_map(|item| {
            let date = DateTime::<Utc>::from_timestamp(item.dt, 0)?.date_naive();
            let (description, icon) = condition(&item.weather);
            Some(ForecastDay {
                date: forecast_label(date),
                timestamp: item.dt,
                temperature: round_temp(item.main.temp),
                feels_like: round_temp(item.main.feels_like),
                description,
                icon,
                humidity: item.main.humidity.unwrap_or(50),
                wind_speed: item.wind.speed.unwrap_or(5.0),
                pressure: item.main.pressure.unwrap_or(1013),
            })
        })
        .collect()
}

/// OpenWeatherMap client
/// DOCUMENTATION: Built once at startup; requests time out after 10 seconds
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(LOOKUP_TIMEOUT)?,
            api_key: config.openweather_api_key.clone(),
            base_url: config.openweather_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn ensure_key(&self) -> Result<(), ExternalApiError> {
        if is_configured(&self.api_key) {
            Ok(())
        } else {
            Err(ExternalApiError::MissingApiKey)
        }
    }

    /// Current conditions at a coordinate
    pub async fn current(&self, lat: f64, lng: f64) -> Result<CurrentWeather, ExternalApiError> {
        self.ensure_key()?;
        log::debug!("OpenWeatherMap current: lat={}, lng={}", lat, lng);

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
                ("lang", "en".to_string()),
            ])
            .send()
            .await?;

        let raw: OwmCurrentResponse = decode_json("OpenWeatherMap", response).await?;
        Ok(normalize_current(raw, lat, lng))
    }

    /// Daily forecast for up to `days` days
    pub async fn forecast(
        &self,
        lat: f64,
        lng: f64,
        days: u32,
    ) -> Result<Vec<ForecastDay>, ExternalApiError> {
        self.ensure_key()?;
        log::debug!("OpenWeatherMap forecast: lat={}, lng={}, days={}", lat, lng, days);

        let response = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let raw: OwmForecastResponse = decode_json("OpenWeatherMap", response).await?;
        let forecast = normalize_forecast(raw, days as usize);
        if forecast.is_empty() {
            return Err(ExternalApiError::Payload("empty forecast list".to_string()));
        }
        Ok(forecast)
    }
}
