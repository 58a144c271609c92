// src/services/fallback/weather.rs
// DOCUMENTATION: Plausible weather from latitude and season alone

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use rand::Rng;

use super::seeded_rng;
use crate::models::{forecast_label, location_label, CurrentWeather, ForecastDay, WeatherCoordinates};

const CONDITIONS: [(&str, &str); 5] = [
    ("clear sky", "01d"),
    ("few clouds", "02d"),
    ("scattered clouds", "03d"),
    ("broken clouds", "04d"),
    ("light rain", "10d"),
];

/// Seasonal base temperature in Celsius before the latitude correction
fn base_temperature(lat: f64, month: u32) -> f64 {
    let northern = lat > 0.0;
    match (month, northern) {
        (3..=5, true) => 20.0,
        (6..=8, true) => 30.0,
        (9..=11, true) => 15.0,
        (_, true) => 5.0,
        (3..=5, false) => 15.0,
        (6..=8, false) => 5.0,
        (9..=11, false) => 20.0,
        (_, false) => 30.0,
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Current conditions for a location on a given day
pub fn current_weather(lat: f64, lng: f64, date: NaiveDate) -> CurrentWeather {
    let mut rng = seeded_rng(&format!("weather|{}|{}|{}", lat, lng, date));

    let latitude_drop = lat.abs() / 90.0 * 30.0;
    let jitter: f64 = rng.random_range(-5.0..5.0);
    let temperature = (base_temperature(lat, date.month()) - latitude_drop + jitter).round() as i32;

    let (description, icon) = CONDITIONS[rng.random_range(0..CONDITIONS.len())];

    CurrentWeather {
        temperature,
        feels_like: temperature + rng.random_range(-2..=2),
        description: description.to_string(),
        icon: icon.to_string(),
        humidity: rng.random_range(40..80),
        wind_speed: one_decimal(rng.random_range(1.0..11.0)),
        wind_direction: rng.random_range(0..360),
        pressure: rng.random_range(1000..1050),
        visibility: one_decimal(rng.random_range(5.0..20.0)),
        cloudiness: rng.random_range(0..100),
        city: location_label(lat, lng),
        country: "Unknown".to_string(),
        coordinates: WeatherCoordinates { lat, lon: lng },
    }
}

/// `days` consecutive daily entries starting at `start`
pub fn forecast(lat: f64, lng: f64, start: NaiveDate, days: u32) -> Vec<ForecastDay> {
    (0..days)
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            let weather = current_weather(lat, lng, date);
            let noon = date.and_time(NaiveTime::default()) + Duration::hours(12);

            ForecastDay {
                date: forecast_label(date),
                timestamp: noon.and_utc().timestamp(),
                temperature: weather.temperature,
                feels_like: weather.feels_like,
                description: weather.description,
                icon: weather.icon,
                humidity: weather.humidity,
                wind_speed: weather.wind_speed,
                pressure: weather.pressure,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_base_temperature_by_hemisphere() {
        assert_eq!(base_temperature(28.0, 7), 30.0);
        assert_eq!(base_temperature(28.0, 1), 5.0);
        assert_eq!(base_temperature(-33.0, 7), 5.0);
        assert_eq!(base_temperature(-33.0, 12), 30.0);
        assert_eq!(base_temperature(-33.0, 10), 20.0);
    }

    #[test]
    fn test_current_weather_is_deterministic() {
        let date = day(2026, 5, 14);
        assert_eq!(
            current_weather(28.6139, 77.2090, date),
            current_weather(28.6139, 77.2090, date)
        );
    }

    #[test]
    fn test_current_weather_ranges() {
        for (lat, lng) in [(28.6139, 77.2090), (-33.86, 151.2), (0.0, 0.0), (64.1, -21.9)] {
            let w = current_weather(lat, lng, day(2026, 1, 20));
            let base = base_temperature(lat, 1) - lat.abs() / 90.0 * 30.0;
            assert!((w.temperature as f64 - base).abs() <= 5.5);
            assert!((w.feels_like - w.temperature).abs() <= 2);
            assert!((40..80).contains(&w.humidity));
            assert!((1.0..=11.0).contains(&w.wind_speed));
            assert!(w.wind_direction < 360);
            assert!((1000..1050).contains(&w.pressure));
            assert!((5.0..=20.0).contains(&w.visibility));
            assert!(w.cloudiness < 100);
            assert_eq!(w.country, "Unknown");
            assert!(CONDITIONS.iter().any(|(d, i)| *d == w.description && *i == w.icon));
        }
    }

    #[test]
    fn test_forecast_days_and_labels() {
        let entries = forecast(19.076, 72.8777, day(2025, 1, 6), 3);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, "Mon, Jan 6");
        assert_eq!(entries[2].date, "Wed, Jan 8");
        assert_eq!(entries[1].timestamp - entries[0].timestamp, 86_400);
        assert_eq!(entries, forecast(19.076, 72.8777, day(2025, 1, 6), 3));
    }
}
