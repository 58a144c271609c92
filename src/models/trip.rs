// src/models/trip.rs
// DOCUMENTATION: Data structures for user trips
// PURPOSE: Trip records, checklist items and request DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{BudgetTier, Place};

/// How the traveller prefers to get there
/// DOCUMENTATION: Maps to the `transport_mode` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transport_mode", rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Car,
}

/// Single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub item: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn pending(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            completed: false,
        }
    }
}

/// AI output saved alongside a trip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripAiRecommendations {
    #[serde(default)]
    pub packing_list: Vec<String>,
    #[serde(default)]
    pub safety_tips: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<String>,
}

/// A user's planned trip
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub user_id: Uuid,
    pub place_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: BudgetTier,
    pub preferred_transport: TransportMode,
    pub checklist: Vec<ChecklistItem>,
    pub ai_recommendations: TripAiRecommendations,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trip with its destination embedded
/// DOCUMENTATION: `place` is None when the referenced place has been deleted
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    #[serde(flatten)]
    pub trip: Trip,
    pub place: Option<Place>,
}

/// Request DTO for POST /api/trips
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_dates", skip_on_field_errors = false))]
pub struct CreateTripRequest {
    pub place_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: BudgetTier,
    pub preferred_transport: TransportMode,
    #[serde(default)]
    #[validate(custom = "validate_checklist_items")]
    pub checklist: Vec<ChecklistItem>,
}

fn validate_create_dates(req: &CreateTripRequest) -> Result<(), ValidationError> {
    check_date_order(req.start_date, req.end_date)
}

/// End date may equal but never precede start date
pub fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        let mut error = ValidationError::new("date_order");
        error.message = Some("endDate must be on or after startDate".into());
        return Err(error);
    }
    Ok(())
}

/// Request DTO for PUT /api/trips/{id}
/// All fields are optional - only provided fields are updated
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub place_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<BudgetTier>,
    pub preferred_transport: Option<TransportMode>,
    #[validate(custom = "validate_checklist_items")]
    pub checklist: Option<Vec<ChecklistItem>>,
    pub ai_recommendations: Option<TripAiRecommendations>,
}

/// Request DTO for PUT /api/trips/{id}/checklist
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateChecklistRequest {
    #[validate(custom = "validate_checklist_items")]
    pub checklist: Vec<ChecklistItem>,
}

fn validate_checklist_items(items: &[ChecklistItem]) -> Result<(), ValidationError> {
    if items.iter().any(|i| i.item.trim().is_empty()) {
        let mut error = ValidationError::new("empty_item");
        error.message = Some("checklist items must not be empty".into());
        return Err(error);
    }
    Ok(())
}

impl Trip {
    /// Merge a partial update, rejecting a result whose dates are out of order
    pub fn apply_update(&mut self, req: UpdateTripRequest) -> Result<(), ValidationError> {
        let start = req.start_date.unwrap_or(self.start_date);
        let end = req.end_date.unwrap_or(self.end_date);
        check_date_order(start, end)?;

        self.start_date = start;
        self.end_date = end;
        if let Some(place_id) = req.place_id {
            self.place_id = place_id;
        }
        if let Some(budget) = req.budget {
            self.budget = budget;
        }
        if let Some(mode) = req.preferred_transport {
            self.preferred_transport = mode;
        }
        if let Some(checklist) = req.checklist {
            self.checklist = checklist;
        }
        if let Some(recommendations) = req.ai_recommendations {
            self.ai_recommendations = recommendations;
        }
        Ok(())
    }
}
