// src/services/flight_client.rs
// DOCUMENTATION: AviationStack flight schedule client
// PURPOSE: Live departures between two airports; fares are not part of the feed

use crate::config::{is_configured, Config};
use crate::errors::ExternalApiError;
use crate::models::{Flight, FlightEndpoint};
use crate::services::http::{build_client, decode_json, LOOKUP_TIMEOUT};
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::Deserialize;

const RESULT_LIMIT: &str = "10";

#[derive(Debug, Deserialize)]
struct AsEndpoint {
    airport: Option<String>,
    iata: Option<String>,
    scheduled: Option<String>,
    terminal: Option<String>,
    gate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AsAirline {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AsFlightNumber {
    iata: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AsAircraft {
    iata: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AsFlight {
    flight_status: Option<String>,
    departure: AsEndpoint,
    arrival: AsEndpoint,
    airline: Option<AsAirline>,
    flight: Option<AsFlightNumber>,
    aircraft: Option<AsAircraft>,
}

#[derive(Debug, Deserialize)]
struct AsFlightsResponse {
    #[serde(default)]
    data: Vec<AsFlight>,
}

/// "2h 15m" between two RFC 3339 timestamps, if both parse
fn duration_label(departure: Option<&str>, arrival: Option<&str>) -> Option<String> {
    let dep = DateTime::parse_from_rfc3339(departure?).ok()?;
    let arr = DateTime::parse_from_rfc3339(arrival?).ok()?;
    let minutes = (arr - dep).num_minutes();
    if minutes < 0 {
        return None;
    }
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

/// Whether a scheduled departure falls on `date` in the airport's local time
fn departs_on(scheduled: Option<&str>, date: NaiveDate) -> bool {
    scheduled
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.date_naive() == date)
        .unwrap_or(false)
}

fn endpoint(raw: AsEndpoint, fallback_iata: &str) -> FlightEndpoint {
    FlightEndpoint {
        airport: raw.airport.unwrap_or_else(|| fallback_iata.to_string()),
        iata: raw.iata.unwrap_or_else(|| fallback_iata.to_string()),
        scheduled: raw.scheduled.unwrap_or_default(),
        terminal: raw.terminal,
        gate: raw.gate,
    }
}

fn to_flights(raw: AsFlightsResponse, from: &str, to: &str, date: NaiveDate) -> Vec<Flight> {
    let mut flights: Vec<Flight> = raw
        .data
        .into_iter()
        .filter(|f| departs_on(f.departure.scheduled.as_deref(), date))
        .filter_map(|f| {
            let flight_number = f.flight.and_then(|n| n.iata)?;
            let duration = duration_label(f.departure.scheduled.as_deref(), f.arrival.scheduled.as_deref())
                .unwrap_or_else(|| "N/A".to_string());

            Some(Flight {
                airline: f
                    .airline
                    .and_then(|a| a.name)
                    .unwrap_or_else(|| "Unknown".to_string()),
                flight_number,
                departure: endpoint(f.departure, from),
                arrival: endpoint(f.arrival, to),
                aircraft: f.aircraft.and_then(|a| a.iata),
                duration,
                status: f.flight_status.unwrap_or_else(|| "scheduled".to_string()),
                price: None,
                seats_available: None,
            })
        })
        .collect();

    flights.sort_by(|a, b| a.departure.scheduled.cmp(&b.departure.scheduled));
    flights
}

pub struct FlightClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FlightClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(LOOKUP_TIMEOUT)?,
            api_key: config.aviationstack_api_key.clone(),
            base_url: config.aviationstack_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Scheduled flights on a route departing on `date`
    /// DOCUMENTATION: An empty schedule is treated as a failure so callers fall back
    pub async fn flights(
        &self,
        from: &str,
        to: &str,
        date: NaiveDate,
    ) -> Result<Vec<Flight>, ExternalApiError> {
        if !is_configured(&self.api_key) {
            return Err(ExternalApiError::MissingApiKey);
        }

        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_uppercase();
        let flight_date = date.format("%Y-%m-%d").to_string();
        log::debug!("AviationStack flights: {} -> {} on {}", from, to, flight_date);

        let response = self
            .client
            .get(format!("{}/flights", self.base_url))
            .query(&[
                ("access_key", self.api_key.as_str()),
                ("dep_iata", from.as_str()),
                ("arr_iata", to.as_str()),
                ("flight_date", flight_date.as_str()),
                ("limit", RESULT_LIMIT),
            ])
            .send()
            .await?;

        let raw: AsFlightsResponse = decode_json("AviationStack", response).await?;
        let flights = to_flights(raw, &from, &to, date);
        if flights.is_empty() {
            return Err(ExternalApiError::Payload(format!(
                "no flights for {} -> {} on {}",
                from, to, flight_date
            )));
        }
        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_flights_maps_and_sorts() {
        let raw: AsFlightsResponse = serde_json::from_value(json!({
            "data": [
                {
                    "flight_status": "active",
                    "departure": { "airport": "Indira Gandhi International", "iata": "DEL",
                                   "scheduled": "2026-03-15T14:00:00+00:00", "terminal": "3" },
                    "arrival": { "airport": "Chhatrapati Shivaji", "iata": "BOM",
                                 "scheduled": "2026-03-15T16:10:00+00:00" },
                    "airline": { "name": "IndiGo" },
                    "flight": { "iata": "6E2113" },
                    "aircraft": null
                },
                {
                    "departure": { "iata": "DEL", "scheduled": "2026-03-15T06:30:00+00:00" },
                    "arrival": { "iata": "BOM", "scheduled": "2026-03-15T08:45:00+00:00" },
                    "airline": { "name": "Air India" },
                    "flight": { "iata": "AI887" }
                },
                {
                    "departure": { "iata": "DEL" },
                    "arrival": { "iata": "BOM" },
                    "flight": null
                }
            ]
        }))
        .unwrap();

        let flights = to_flights(raw, "DEL", "BOM", day(2026, 3, 15));
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].flight_number, "AI887");
        assert_eq!(flights[0].duration, "2h 15m");
        assert_eq!(flights[0].status, "scheduled");
        assert_eq!(flights[1].departure.terminal.as_deref(), Some("3"));
        assert_eq!(flights[1].status, "active");
        assert!(flights.iter().all(|f| f.price.is_none()));
    }

    #[test]
    fn test_to_flights_drops_other_days() {
        let raw: AsFlightsResponse = serde_json::from_value(json!({
            "data": [
                {
                    "departure": { "iata": "DEL", "scheduled": "2026-03-15T09:00:00+05:30" },
                    "arrival": { "iata": "BOM", "scheduled": "2026-03-15T11:10:00+05:30" },
                    "flight": { "iata": "6E2001" }
                },
                {
                    "departure": { "iata": "DEL", "scheduled": "2026-04-20T09:00:00+05:30" },
                    "arrival": { "iata": "BOM", "scheduled": "2026-04-20T11:10:00+05:30" },
                    "flight": { "iata": "6E2002" }
                },
                {
                    "departure": { "iata": "DEL" },
                    "arrival": { "iata": "BOM" },
                    "flight": { "iata": "6E2003" }
                }
            ]
        }))
        .unwrap();

        let flights = to_flights(raw, "DEL", "BOM", day(2026, 4, 20));
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_number, "6E2002");
    }

    #[test]
    fn test_departure_date_uses_local_offset() {
        // 00:30 in Delhi is still the previous day in UTC
        assert!(departs_on(Some("2026-03-15T00:30:00+05:30"), day(2026, 3, 15)));
        assert!(!departs_on(Some("2026-03-15T00:30:00+05:30"), day(2026, 3, 14)));
        assert!(!departs_on(None, day(2026, 3, 15)));
    }

    #[test]
    fn test_duration_label_requires_both_times() {
        assert_eq!(duration_label(Some("2026-01-01T10:00:00+00:00"), None), None);
        assert_eq!(
            duration_label(Some("2026-01-01T23:30:00+05:30"), Some("2026-01-02T01:05:00+05:30")),
            Some("1h 35m".to_string())
        );
    }
}
