// src/models/ai.rs
// DOCUMENTATION: AI planning requests and their structured answers
// PURPOSE: Gemini JSON output is deserialized straight into these types,
// so the field names double as the JSON contract given in prompts

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ChecklistItem;

/// Body of POST /api/ai/recommend-trip
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendTripRequest {
    #[validate(length(min = 1, message = "budget is required"))]
    pub budget: String,
    #[validate(length(min = 1, message = "place is required"))]
    pub place: String,
    #[validate(range(min = 1, max = 30, message = "days must be between 1 and 30"))]
    pub days: u32,
    pub travel_style: Option<String>,
    pub companions: Option<String>,
}

/// Body of POST /api/ai/packing-list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PackingListRequest {
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[validate(range(min = 1, max = 30, message = "days must be between 1 and 30"))]
    pub days: u32,
    #[validate(length(min = 1, message = "season is required"))]
    pub season: String,
    #[serde(default)]
    pub activities: Vec<String>,
    pub budget: Option<String>,
}

/// Body of POST /api/ai/safety-tips
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SafetyTipsRequest {
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    pub travel_style: Option<String>,
    pub companions: Option<String>,
    pub season: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub accommodation: String,
    pub meals: String,
}

/// Human-readable cost estimates, e.g. "₹1,500 - ₹3,000 per night"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub accommodation: String,
    pub food: String,
    pub activities: String,
    pub transportation: String,
    pub total_estimate: String,
}

/// Full trip plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecommendation {
    pub itinerary: Vec<ItineraryDay>,
    pub budget_breakdown: BudgetBreakdown,
    pub must_visit: Vec<String>,
    pub local_cuisine: Vec<String>,
    pub transport_tips: String,
    pub cultural_notes: String,
    pub packing_suggestions: Vec<String>,
}

/// Packing list as the model returns it: plain strings per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackingListDraft {
    pub clothing: Vec<String>,
    pub toiletries: Vec<String>,
    pub electronics: Vec<String>,
    pub documents: Vec<String>,
    pub medications: Vec<String>,
    pub miscellaneous: Vec<String>,
}

/// Packing list as served: every entry is an unchecked checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackingList {
    pub clothing: Vec<ChecklistItem>,
    pub toiletries: Vec<ChecklistItem>,
    pub electronics: Vec<ChecklistItem>,
    pub documents: Vec<ChecklistItem>,
    pub medications: Vec<ChecklistItem>,
    pub miscellaneous: Vec<ChecklistItem>,
}

fn to_checklist<S: AsRef<str>>(items: &[S]) -> Vec<ChecklistItem> {
    items.iter().map(|i| ChecklistItem::pending(i.as_ref())).collect()
}

impl From<PackingListDraft> for PackingList {
    fn from(draft: PackingListDraft) -> Self {
        PackingList {
            clothing: to_checklist(&draft.clothing),
            toiletries: to_checklist(&draft.toiletries),
            electronics: to_checklist(&draft.electronics),
            documents: to_checklist(&draft.documents),
            medications: to_checklist(&draft.medications),
            miscellaneous: to_checklist(&draft.miscellaneous),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyTips {
    pub general_safety: Vec<String>,
    pub health_precautions: Vec<String>,
    pub local_laws: Vec<String>,
    pub emergency_contacts: Vec<String>,
    pub scam_awareness: Vec<String>,
    pub transportation_safety: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_packing_draft_becomes_unchecked_items() {
        let draft: PackingListDraft = serde_json::from_value(json!({
            "clothing": ["Raincoat"],
            "toiletries": [],
            "electronics": ["Charger"],
            "documents": [],
            "medications": [],
            "miscellaneous": []
        }))
        .unwrap();

        let list = PackingList::from(draft);
        assert_eq!(list.clothing, vec![ChecklistItem::pending("Raincoat")]);
        assert!(!list.electronics[0].completed);
    }

    #[test]
    fn test_trip_recommendation_rejects_partial_json() {
        let result: Result<TripRecommendation, _> =
            serde_json::from_value(json!({ "itinerary": [], "mustVisit": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_recommend_trip_request_bounds_days() {
        let req: RecommendTripRequest = serde_json::from_value(json!({
            "budget": "low", "place": "Goa", "days": 0
        }))
        .unwrap();
        assert!(req.validate().is_err());

        let req: RecommendTripRequest = serde_json::from_value(json!({
            "budget": "low", "place": "Goa", "days": 4, "travelStyle": "relaxed"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.travel_style.as_deref(), Some("relaxed"));
    }
}
