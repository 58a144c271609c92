// src/models/restaurant.rs
// DOCUMENTATION: Restaurants near a place

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::PriceRange;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub place_id: Uuid,
    pub price_range: PriceRange,
    pub rating: f64,
    pub address: String,
    pub cuisine_type: Vec<String>,
    pub menu_link: String,
    pub distance_from_place: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for POST /api/restaurants
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, max = 200, message = "name is required (max 200 characters)"))]
    pub name: String,
    pub place_id: Uuid,
    pub price_range: PriceRange,
    #[validate(range(min = 1.0, max = 5.0, message = "rating must be between 1 and 5"))]
    pub rating: f64,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[serde(default)]
    pub cuisine_type: Vec<String>,
    #[validate(length(min = 1, message = "menu link is required"))]
    pub menu_link: String,
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance_from_place: f64,
    #[serde(default)]
    pub image: String,
}
