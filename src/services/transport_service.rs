// src/services/transport_service.rs
// DOCUMENTATION: Flights, trains and transport advice
// PURPOSE: Live flight schedules and Gemini advice when available, generated data otherwise

use crate::errors::ExternalApiError;
use crate::models::{Flight, Sourced, Train, TransportRecommendationRequest, TransportRecommendations};
use crate::services::fallback;
use crate::services::{FlightClient, GeminiClient};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

const MOCK_SOURCE: &str = "Mock Data";
const AI_SOURCE: &str = "Google Gemini";
const AI_FALLBACK_SOURCE: &str = "Enhanced Fallback Data";

const RECOMMENDATION_MAX_TOKENS: u32 = 800;
const MAX_ITEMS_PER_SECTION: usize = 5;
const MIN_ITEM_CHARS: usize = 10;

lazy_static! {
    /// Section header such as "BEST TRANSPORT OPTIONS:" or "**Booking Tips**"
    static ref SECTION_HEADER: Regex = Regex::new(
        r"(?i)^[#\s*]*(best transport options|cost comparison|travel duration|booking tips|travel advice)[\s*]*:?[\s*]*$"
    )
    .unwrap();
    /// Leading list marker: "-", "*", "•", "1." or "1)"
    static ref LIST_MARKER: Regex = Regex::new(r"^\s*(?:[-*•]|\d+[.)])\s*").unwrap();
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    BestOptions,
    CostComparison,
    TravelDuration,
    BookingTips,
    TravelAdvice,
}

impl Section {
    fn from_header(header: &str) -> Option<Self> {
        match header.to_ascii_lowercase().as_str() {
            "best transport options" => Some(Section::BestOptions),
            "cost comparison" => Some(Section::CostComparison),
            "travel duration" => Some(Section::TravelDuration),
            "booking tips" => Some(Section::BookingTips),
            "travel advice" => Some(Section::TravelAdvice),
            _ => None,
        }
    }
}

fn recommendation_prompt(req: &TransportRecommendationRequest) -> String {
    format!(
        "As a travel expert, provide transportation recommendations for traveling from {from} to {to}.\n\
         Budget: {budget}. Travel style: {style}. Companions: {companions}.\n\n\
         Answer using exactly these section headers, each followed by 3 to 5 lines starting with \"- \":\n\n\
         BEST TRANSPORT OPTIONS:\n- [Option with details]\n\n\
         COST COMPARISON:\n- [Transport mode and price range in INR]\n\n\
         TRAVEL DURATION:\n- [Transport mode and typical time]\n\n\
         BOOKING TIPS:\n- [Tip]\n\n\
         TRAVEL ADVICE:\n- [Advice]",
        from = req.from,
        to = req.to,
        budget = req.budget_or_default(),
        style = req.travel_style_or_default(),
        companions = req.companions_or_default(),
    )
}

fn list_item(line: &str) -> Option<String> {
    let item = LIST_MARKER.replace(line, "").replace("**", "");
    let item = item.trim();
    (item.chars().count() > MIN_ITEM_CHARS).then(|| item.to_string())
}

/// Split a sectioned Gemini answer into recommendations
/// DOCUMENTATION: Sections the model skipped are filled from the templated advice;
/// an answer without any transport options is rejected
pub fn parse_recommendations(
    text: &str,
    req: &TransportRecommendationRequest,
) -> Result<TransportRecommendations, ExternalApiError> {
    let mut parsed = TransportRecommendations::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if let Some(caps) = SECTION_HEADER.captures(line.trim()) {
            current = Section::from_header(&caps[1]);
            continue;
        }

        let Some(section) = current else { continue };
        let Some(item) = list_item(line) else { continue };

        let bucket = match section {
            Section::BestOptions => &mut parsed.best_options,
            Section::CostComparison => &mut parsed.cost_comparison,
            Section::TravelDuration => &mut parsed.travel_duration,
            Section::BookingTips => &mut parsed.booking_tips,
            Section::TravelAdvice => &mut parsed.travel_advice,
        };
        if bucket.len() < MAX_ITEMS_PER_SECTION {
            bucket.push(item);
        }
    }

    if parsed.best_options.is_empty() {
        return Err(ExternalApiError::Payload(
            "no transport options in AI answer".to_string(),
        ));
    }

    let template = fallback::transport::recommendations(req);
    if parsed.cost_comparison.is_empty() {
        parsed.cost_comparison = template.cost_comparison;
    }
    if parsed.travel_duration.is_empty() {
        parsed.travel_duration = template.travel_duration;
    }
    if parsed.booking_tips.is_empty() {
        parsed.booking_tips = template.booking_tips;
    }
    if parsed.travel_advice.is_empty() {
        parsed.travel_advice = template.travel_advice;
    }

    parsed.summary = format!(
        "AI-recommended transport options from {} to {} for {} with {} budget",
        req.from,
        req.to,
        req.companions_or_default(),
        req.budget_or_default()
    );
    Ok(parsed)
}

pub struct TransportService;

impl TransportService {
    /// Flights on a date; live schedules carry no fares
    pub async fn flights(
        client: &FlightClient,
        from: &str,
        to: &str,
        date: NaiveDate,
    ) -> Sourced<Vec<Flight>> {
        match client.flights(from, to, date).await {
            Ok(flights) => Sourced::live(flights, "AviationStack"),
            Err(e) => {
                log::warn!("Flight API unavailable ({}), serving mock flights", e);
                Sourced::fallback(
                    fallback::transport::flights(from, to, date),
                    MOCK_SOURCE,
                    "Using mock flight data",
                )
            }
        }
    }

    /// Trains always come from the generator
    pub fn trains(from: &str, to: &str, date: NaiveDate) -> Sourced<Vec<Train>> {
        Sourced::fallback(
            fallback::transport::trains(from, to, date),
            MOCK_SOURCE,
            "Using mock train data",
        )
    }

    /// Transport advice between two places
    pub async fn recommendations(
        client: &GeminiClient,
        req: &TransportRecommendationRequest,
    ) -> Sourced<TransportRecommendations> {
        let answer = client
            .generate_text(&recommendation_prompt(req), RECOMMENDATION_MAX_TOKENS)
            .await
            .and_then(|text| parse_recommendations(&text, req));

        match answer {
            Ok(recommendations) => Sourced::live(recommendations, AI_SOURCE),
            Err(e) => {
                log::warn!("Gemini unavailable for transport advice ({}), using templates", e);
                Sourced::fallback(
                    fallback::transport::recommendations(req),
                    AI_FALLBACK_SOURCE,
                    "Using enhanced fallback data",
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn request() -> TransportRecommendationRequest {
        TransportRecommendationRequest {
            from: "DEL".to_string(),
            to: "BOM".to_string(),
            budget: Some("low".to_string()),
            travel_style: None,
            companions: Some("family".to_string()),
        }
    }

    #[test]
    fn test_parse_sectioned_answer() {
        let text = "\
**BEST TRANSPORT OPTIONS:**
- **Flight**: Direct flights take about two hours
- Rajdhani Express overnight train with meals included
- Short

COST COMPARISON:
1. Flights between Rs 3,500 and Rs 7,000
2. Trains between Rs 1,200 and Rs 4,500

## Booking Tips
* Book trains 60 days ahead on the railway portal
";
        let parsed = parse_recommendations(text, &request()).unwrap();

        assert_eq!(
            parsed.best_options,
            vec![
                "Flight: Direct flights take about two hours".to_string(),
                "Rajdhani Express overnight train with meals included".to_string(),
            ]
        );
        assert_eq!(parsed.cost_comparison.len(), 2);
        assert_eq!(parsed.booking_tips, vec!["Book trains 60 days ahead on the railway portal".to_string()]);

        let template = fallback::transport::recommendations(&request());
        assert_eq!(parsed.travel_duration, template.travel_duration);
        assert_eq!(parsed.travel_advice, template.travel_advice);
        assert_eq!(
            parsed.summary,
            "AI-recommended transport options from DEL to BOM for family with low budget"
        );
    }

    #[test]
    fn test_parse_caps_items_per_section() {
        let mut text = String::from("BEST TRANSPORT OPTIONS:\n");
        for i in 0..8 {
            text.push_str(&format!("- Option number {} with plenty of detail\n", i));
        }
        let parsed = parse_recommendations(&text, &request()).unwrap();
        assert_eq!(parsed.best_options.len(), MAX_ITEMS_PER_SECTION);
    }

    #[test]
    fn test_parse_rejects_answer_without_options() {
        let result = parse_recommendations("I cannot help with that request.", &request());
        assert!(matches!(result, Err(ExternalApiError::Payload(_))));
    }

    #[test]
    fn test_prompt_uses_defaults() {
        let prompt = recommendation_prompt(&request());
        assert!(prompt.contains("from DEL to BOM"));
        assert!(prompt.contains("Travel style: comfortable"));
        assert!(prompt.contains("BEST TRANSPORT OPTIONS:"));
    }

    #[test]
    fn test_trains_are_always_mock() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let trains = TransportService::trains("DEL", "BOM", date);
        assert_eq!(trains.source, MOCK_SOURCE);
        assert!(trains.is_fallback());
        assert!(!trains.data.is_empty());
    }

    #[actix_web::test]
    async fn test_unreachable_apis_fall_back() {
        let config = Config::for_tests();
        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();

        let flights = TransportService::flights(&FlightClient::new(&config).unwrap(), "DEL", "BOM", date).await;
        assert_eq!(flights.source, MOCK_SOURCE);
        assert!(flights.data.iter().all(|f| f.price.is_some()));

        let advice =
            TransportService::recommendations(&GeminiClient::new(&config).unwrap(), &request()).await;
        assert_eq!(advice.source, AI_FALLBACK_SOURCE);
        assert_eq!(advice.data, fallback::transport::recommendations(&request()));
    }
}
