// src/services/ai_service.rs
// DOCUMENTATION: AI trip planning
// PURPOSE: Gemini JSON answers for trip plans, packing lists and safety tips,
// replaced by templated documents whenever the model cannot be used

use crate::models::{
    PackingList, PackingListDraft, PackingListRequest, RecommendTripRequest, SafetyTips,
    SafetyTipsRequest, Sourced, TripRecommendation,
};
use crate::services::fallback;
use crate::services::GeminiClient;

const AI_SOURCE: &str = "Google Gemini";
const FALLBACK_SOURCE: &str = "Enhanced Fallback Data";
const FALLBACK_NOTE: &str = "Using enhanced fallback data";

const TRIP_PLAN_MAX_TOKENS: u32 = 2000;
const CHECKLIST_MAX_TOKENS: u32 = 1000;

fn trip_prompt(req: &RecommendTripRequest) -> String {
    format!(
        r#"As a travel expert, create a detailed {days}-day trip plan for {place} with a {budget} budget for {companions}. Travel style: {style}.

Provide the response in this exact JSON format:
{{
  "itinerary": [
    {{
      "day": 1,
      "morning": "activity description",
      "afternoon": "activity description",
      "evening": "activity description",
      "accommodation": "suggestion",
      "meals": "recommendations"
    }}
  ],
  "budgetBreakdown": {{
    "accommodation": "cost estimate",
    "food": "cost estimate",
    "activities": "cost estimate",
    "transportation": "cost estimate",
    "totalEstimate": "total cost"
  }},
  "mustVisit": ["place1", "place2", "place3"],
  "localCuisine": ["dish1", "dish2", "dish3"],
  "transportTips": "transportation advice",
  "culturalNotes": "cultural insights and tips",
  "packingSuggestions": ["item1", "item2", "item3"]
}}

Include one itinerary entry per day. Make it practical and realistic."#,
        days = req.days,
        place = req.place,
        budget = req.budget,
        companions = req.companions.as_deref().unwrap_or("solo"),
        style = req.travel_style.as_deref().unwrap_or("comfortable"),
    )
}

fn packing_prompt(req: &PackingListRequest) -> String {
    let activities = if req.activities.is_empty() {
        "general sightseeing".to_string()
    } else {
        req.activities.join(", ")
    };

    format!(
        r#"Create a comprehensive packing list for a {days}-day trip to {destination} during {season}. Activities: {activities}. Budget level: {budget}.

Provide the response in this exact JSON format:
{{
  "clothing": ["item1", "item2", "item3"],
  "toiletries": ["item1", "item2", "item3"],
  "electronics": ["item1", "item2", "item3"],
  "documents": ["item1", "item2", "item3"],
  "medications": ["item1", "item2", "item3"],
  "miscellaneous": ["item1", "item2", "item3"]
}}

Make it practical and tailored to the destination."#,
        days = req.days,
        destination = req.destination,
        season = req.season,
        activities = activities,
        budget = req.budget.as_deref().unwrap_or("medium"),
    )
}

fn safety_prompt(req: &SafetyTipsRequest) -> String {
    format!(
        r#"Provide comprehensive safety tips for traveling to {destination}. Travel style: {style}. Companions: {companions}. Season: {season}.

Provide the response in this exact JSON format:
{{
  "generalSafety": ["tip1", "tip2", "tip3"],
  "healthPrecautions": ["tip1", "tip2", "tip3"],
  "localLaws": ["tip1", "tip2", "tip3"],
  "emergencyContacts": ["contact1", "contact2", "contact3"],
  "scamAwareness": ["tip1", "tip2", "tip3"],
  "transportationSafety": ["tip1", "tip2", "tip3"]
}}

Make the tips practical and specific."#,
        destination = req.destination,
        style = req.travel_style.as_deref().unwrap_or("comfortable"),
        companions = req.companions.as_deref().unwrap_or("solo"),
        season = req.season.as_deref().unwrap_or("any season"),
    )
}

pub struct AiService;

impl AiService {
    /// Day-by-day plan with a budget breakdown
    pub async fn recommend_trip(
        client: &GeminiClient,
        req: &RecommendTripRequest,
    ) -> Sourced<TripRecommendation> {
        match client
            .generate_json::<TripRecommendation>(&trip_prompt(req), TRIP_PLAN_MAX_TOKENS)
            .await
        {
            Ok(plan) if !plan.itinerary.is_empty() => Sourced::live(plan, AI_SOURCE),
            Ok(_) => {
                log::warn!("Gemini returned an empty itinerary for {}, using template", req.place);
                Self::template_trip(req)
            }
            Err(e) => {
                log::warn!("Gemini unavailable for trip plan ({}), using template", e);
                Self::template_trip(req)
            }
        }
    }

    fn template_trip(req: &RecommendTripRequest) -> Sourced<TripRecommendation> {
        Sourced::fallback(
            fallback::ai::trip_recommendation(&req.budget, &req.place, req.days),
            FALLBACK_SOURCE,
            FALLBACK_NOTE,
        )
    }

    /// Categorized packing checklist
    pub async fn packing_list(
        client: &GeminiClient,
        req: &PackingListRequest,
    ) -> Sourced<PackingList> {
        match client
            .generate_json::<PackingListDraft>(&packing_prompt(req), CHECKLIST_MAX_TOKENS)
            .await
        {
            Ok(draft) => Sourced::live(PackingList::from(draft), AI_SOURCE),
            Err(e) => {
                log::warn!("Gemini unavailable for packing list ({}), using template", e);
                Sourced::fallback(
                    fallback::ai::packing_list(&req.season),
                    FALLBACK_SOURCE,
                    FALLBACK_NOTE,
                )
            }
        }
    }

    /// Safety advice for a destination
    pub async fn safety_tips(client: &GeminiClient, req: &SafetyTipsRequest) -> Sourced<SafetyTips> {
        match client
            .generate_json::<SafetyTips>(&safety_prompt(req), CHECKLIST_MAX_TOKENS)
            .await
        {
            Ok(tips) => Sourced::live(tips, AI_SOURCE),
            Err(e) => {
                log::warn!("Gemini unavailable for safety tips ({}), using template", e);
                Sourced::fallback(fallback::ai::safety_tips(), FALLBACK_SOURCE, FALLBACK_NOTE)
            }
        }
    }
}
