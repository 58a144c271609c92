// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use super::PageParams;

/// Kind of destination
/// DOCUMENTATION: Maps to the `place_category` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "place_category", rename_all = "lowercase")]
pub enum Category {
    Beach,
    Mountain,
    City,
    Historical,
    Adventure,
}

/// Budget tier shared by places, trips and AI requests
/// DOCUMENTATION: Maps to the `budget_tier` Postgres enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "budget_tier", rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }

    /// Lenient parse used by AI endpoints: unknown tiers are treated as medium
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(BudgetTier::Low),
            "medium" => Ok(BudgetTier::Medium),
            "high" => Ok(BudgetTier::High),
            other => Err(format!("unknown budget tier: {}", other)),
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Validate for Coordinates {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !(-90.0..=90.0).contains(&self.lat) {
            errors.add("lat", out_of_range("latitude must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            errors.add("lng", out_of_range("longitude must be between -180 and 180"));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn out_of_range(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("range");
    error.message = Some(message.into());
    error
}

/// A travel destination
/// DOCUMENTATION: API representation of a row in the places table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub state: String,
    pub country: String,
    pub images: Vec<String>,
    pub coordinates: Coordinates,
    pub best_season: String,
    /// Average rating, 0-5
    pub rating: f64,
    pub tips: Vec<String>,
    pub category: Category,
    pub budget: BudgetTier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new place
/// DOCUMENTATION: Body of POST /api/places
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, max = 200, message = "name is required (max 200 characters)"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[validate]
    pub coordinates: Coordinates,

    #[validate(length(min = 1, message = "best season is required"))]
    pub best_season: String,

    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub tips: Vec<String>,

    pub category: Category,

    pub budget: BudgetTier,
}

/// Request DTO for updating an existing place
/// DOCUMENTATION: Body of PUT /api/places/{id}
/// All fields are optional - only provided fields are updated
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: Option<String>,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: Option<String>,
    pub images: Option<Vec<String>>,
    #[validate]
    pub coordinates: Option<Coordinates>,
    #[validate(length(min = 1, message = "best season must not be empty"))]
    pub best_season: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    pub tips: Option<Vec<String>>,
    pub category: Option<Category>,
    pub budget: Option<BudgetTier>,
}

impl Place {
    /// Merge a partial update into this place
    pub fn apply_update(&mut self, req: UpdatePlaceRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(description) = req.description {
            self.description = description;
        }
        if let Some(state) = req.state {
            self.state = state;
        }
        if let Some(country) = req.country {
            self.country = country;
        }
        if let Some(images) = req.images {
            self.images = images;
        }
        if let Some(coordinates) = req.coordinates {
            self.coordinates = coordinates;
        }
        if let Some(best_season) = req.best_season {
            self.best_season = best_season;
        }
        if let Some(rating) = req.rating {
            self.rating = rating;
        }
        if let Some(tips) = req.tips {
            self.tips = tips;
        }
        if let Some(category) = req.category {
            self.category = category;
        }
        if let Some(budget) = req.budget {
            self.budget = budget;
        }
    }
}

/// Sort order for place listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceSort {
    /// Highest rated first
    #[default]
    Rating,
    /// Alphabetical
    Name,
    /// Most recently created first
    Newest,
}

impl PlaceSort {
    /// Unknown values fall back to rating order
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("name") => PlaceSort::Name,
            Some("newest") => PlaceSort::Newest,
            _ => PlaceSort::Rating,
        }
    }

    /// ORDER BY body; `id` breaks ties so LIMIT/OFFSET pages never overlap
    pub fn order_by(&self) -> &'static str {
        match self {
            PlaceSort::Rating => "rating DESC, created_at DESC, id ASC",
            PlaceSort::Name => "name ASC, id ASC",
            PlaceSort::Newest => "created_at DESC, id ASC",
        }
    }
}

/// Query parameters for GET /api/places
/// DOCUMENTATION: All parameters are optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceQuery {
    /// Substring matched against name, description, state and country
    pub search: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub category: Option<Category>,
    pub budget: Option<BudgetTier>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PlaceQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn sort(&self) -> PlaceSort {
        PlaceSort::from_param(self.sort.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;
    use serde_json::json;

    fn sample_request() -> CreatePlaceRequest {
        serde_json::from_value(json!({
            "name": "Goa Beach",
            "description": "Beaches and Portuguese heritage",
            "state": "Goa",
            "country": "India",
            "coordinates": { "lat": 15.2993, "lng": 74.1240 },
            "bestSeason": "November to February",
            "rating": 4.5,
            "category": "beach",
            "budget": "medium"
        }))
        .unwrap()
    }

    #[test]
    fn test_create_request_deserializes_camel_case() {
        let req = sample_request();
        assert_eq!(req.best_season, "November to February");
        assert_eq!(req.category, Category::Beach);
        assert_eq!(req.budget, BudgetTier::Medium);
        assert!(req.images.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rating_and_coordinates_are_validated() {
        let mut req = sample_request();
        req.rating = Some(5.5);
        req.coordinates.lat = 120.0;

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
        assert!(errors.errors().contains_key("coordinates"));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result: Result<CreatePlaceRequest, _> = serde_json::from_value(json!({
            "name": "x", "description": "x", "state": "x", "country": "x",
            "coordinates": { "lat": 0.0, "lng": 0.0 },
            "bestSeason": "x", "category": "desert", "budget": "low"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_budget_tier_parsing() {
        assert_eq!("HIGH".parse::<BudgetTier>().unwrap(), BudgetTier::High);
        assert_eq!(BudgetTier::parse_or_default(Some("luxury")), BudgetTier::Medium);
        assert_eq!(BudgetTier::parse_or_default(None), BudgetTier::Medium);
        assert_eq!(BudgetTier::parse_or_default(Some("low")), BudgetTier::Low);
    }

    #[test]
    fn test_sort_param_falls_back_to_rating() {
        assert_eq!(PlaceSort::from_param(Some("name")), PlaceSort::Name);
        assert_eq!(PlaceSort::from_param(Some("newest")), PlaceSort::Newest);
        assert_eq!(PlaceSort::from_param(Some("price")), PlaceSort::Rating);
        assert_eq!(PlaceSort::from_param(None), PlaceSort::Rating);
    }

    #[test]
    fn test_every_sort_ends_with_unique_tiebreaker() {
        for sort in [PlaceSort::Rating, PlaceSort::Name, PlaceSort::Newest] {
            assert!(sort.order_by().ends_with(", id ASC"), "{:?}", sort);
        }
    }

    #[test]
    fn test_place_query_from_query_string() {
        let query = Query::<PlaceQuery>::from_query(
            "search=goa&category=beach&budget=low&sort=name&page=2",
        )
        .unwrap()
        .into_inner();
        assert_eq!(query.category, Some(Category::Beach));
        assert_eq!(query.budget, Some(BudgetTier::Low));
        assert_eq!(query.sort(), PlaceSort::Name);
        assert_eq!(query.page_params().page(), 2);
        assert_eq!(query.page_params().offset(), 12);

        assert!(Query::<PlaceQuery>::from_query("category=desert").is_err());
        assert!(Query::<PlaceQuery>::from_query("budget=luxury").is_err());
    }

    #[test]
    fn test_apply_update_only_touches_provided_fields() {
        let now = Utc::now();
        let mut place = Place {
            id: Uuid::new_v4(),
            name: "Manali".into(),
            description: "Hill station".into(),
            state: "Himachal Pradesh".into(),
            country: "India".into(),
            images: vec![],
            coordinates: Coordinates { lat: 32.2396, lng: 77.1887 },
            best_season: "October to June".into(),
            rating: 4.3,
            tips: vec![],
            category: Category::Mountain,
            budget: BudgetTier::Low,
            created_at: now,
            updated_at: now,
        };

        place.apply_update(UpdatePlaceRequest {
            rating: Some(4.8),
            budget: Some(BudgetTier::High),
            ..Default::default()
        });

        assert_eq!(place.name, "Manali");
        assert_eq!(place.rating, 4.8);
        assert_eq!(place.budget, BudgetTier::High);
        assert_eq!(place.category, Category::Mountain);
    }
}
