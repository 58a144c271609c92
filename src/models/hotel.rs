// src/models/hotel.rs
// DOCUMENTATION: Hotels near a place
// PURPOSE: Hotel records and the create request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Price bracket for hotels and restaurants
/// DOCUMENTATION: Maps to the `price_range` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "price_range", rename_all = "lowercase")]
pub enum PriceRange {
    Cheap,
    Medium,
    Expensive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub place_id: Uuid,
    pub price_range: PriceRange,
    pub rating: f64,
    pub address: String,
    pub amenities: Vec<String>,
    pub booking_link: String,
    /// Kilometres from the place centre
    pub distance_from_place: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for POST /api/hotels
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, max = 200, message = "name is required (max 200 characters)"))]
    pub name: String,

    pub place_id: Uuid,

    pub price_range: PriceRange,

    #[validate(range(min = 1.0, max = 5.0, message = "rating must be between 1 and 5"))]
    pub rating: f64,

    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[validate(length(min = 1, message = "booking link is required"))]
    pub booking_link: String,

    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance_from_place: f64,

    #[serde(default)]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_hotel_request() {
        let req: CreateHotelRequest = serde_json::from_value(json!({
            "name": "Taj Exotica",
            "placeId": Uuid::new_v4(),
            "priceRange": "expensive",
            "rating": 4.7,
            "address": "Benaulim, Goa",
            "amenities": ["Pool", "Spa"],
            "bookingLink": "https://example.com/taj",
            "distanceFromPlace": 2.5
        }))
        .unwrap();

        assert_eq!(req.price_range, PriceRange::Expensive);
        assert_eq!(req.image, "");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rating_below_one_is_rejected() {
        let req: CreateHotelRequest = serde_json::from_value(json!({
            "name": "Budget Inn",
            "placeId": Uuid::new_v4(),
            "priceRange": "cheap",
            "rating": 0.5,
            "address": "MG Road",
            "bookingLink": "https://example.com/inn",
            "distanceFromPlace": -1.0
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("rating"));
        assert!(fields.contains_key("distance_from_place"));
    }
}
