// src/models/transport.rs
// DOCUMENTATION: Flight, train and transport-advice payloads
// PURPOSE: Shapes shared by live API results and generated schedules

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query for GET /api/transport/flights and /api/transport/trains
/// DOCUMENTATION: `from`/`to` are IATA-style city codes, `date` is YYYY-MM-DD
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransportQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
}

/// One end of a flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub airport: String,
    pub iata: String,
    /// ISO-8601 timestamp
    pub scheduled: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
    /// e.g. "2h 35m"
    pub duration: String,
    pub status: String,
    /// Schedules from the live API carry no fares
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats_available: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainStop {
    pub station: String,
    pub code: String,
    /// HH:MM
    pub time: String,
}

/// Fare and availability for one berth class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainClass {
    #[serde(rename = "class")]
    pub class_code: String,
    /// "Y" when seats are available, "N" otherwise
    pub availability: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub name: String,
    pub number: String,
    pub from: TrainStop,
    pub to: TrainStop,
    pub duration: String,
    pub classes: Vec<TrainClass>,
    #[serde(rename = "type")]
    pub train_type: String,
}

/// Body of POST /api/transport/recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransportRecommendationRequest {
    #[validate(length(min = 1, message = "from is required"))]
    pub from: String,
    #[validate(length(min = 1, message = "to is required"))]
    pub to: String,
    pub budget: Option<String>,
    pub travel_style: Option<String>,
    pub companions: Option<String>,
}

impl TransportRecommendationRequest {
    pub fn budget_or_default(&self) -> &str {
        self.budget.as_deref().unwrap_or("medium")
    }

    pub fn travel_style_or_default(&self) -> &str {
        self.travel_style.as_deref().unwrap_or("comfortable")
    }

    pub fn companions_or_default(&self) -> &str {
        self.companions.as_deref().unwrap_or("solo")
    }
}

/// Sectioned transport advice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRecommendations {
    pub best_options: Vec<String>,
    pub cost_comparison: Vec<String>,
    pub travel_duration: Vec<String>,
    pub booking_tips: Vec<String>,
    pub travel_advice: Vec<String>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_train_renames_reserved_fields() {
        let train = Train {
            name: "Rajdhani Express".into(),
            number: "12301".into(),
            from: TrainStop {
                station: "New Delhi Junction".into(),
                code: "DEL".into(),
                time: "06:10".into(),
            },
            to: TrainStop {
                station: "Mumbai Central Junction".into(),
                code: "BOM".into(),
                time: "16:10".into(),
            },
            duration: "10h 0m".into(),
            classes: vec![TrainClass {
                class_code: "1A".into(),
                availability: "Y".into(),
                price: "₹2,999".into(),
            }],
            train_type: "Superfast".into(),
        };

        let value = serde_json::to_value(&train).unwrap();
        assert_eq!(value["type"], "Superfast");
        assert_eq!(value["classes"][0]["class"], "1A");
    }

    #[test]
    fn test_recommendation_request_defaults() {
        let req: TransportRecommendationRequest =
            serde_json::from_value(json!({ "from": "DEL", "to": "BOM" })).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.budget_or_default(), "medium");
        assert_eq!(req.travel_style_or_default(), "comfortable");
        assert_eq!(req.companions_or_default(), "solo");
    }

    #[test]
    fn test_recommendation_request_requires_endpoints() {
        let req: TransportRecommendationRequest =
            serde_json::from_value(json!({ "from": "", "to": "BOM" })).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("from"));
    }
}
