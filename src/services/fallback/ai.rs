// src/services/fallback/ai.rs
// DOCUMENTATION: Templated trip plans, packing lists and safety tips

use super::{format_inr, format_inr_range};
use crate::models::{
    BudgetBreakdown, BudgetTier, ItineraryDay, PackingList, PackingListDraft, SafetyTips,
    TripRecommendation,
};

/// Daily cost ranges in rupees for one budget tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostRanges {
    pub accommodation: (u32, u32),
    pub food: (u32, u32),
    pub activities: (u32, u32),
    pub transportation: (u32, u32),
}

impl CostRanges {
    pub fn for_tier(tier: BudgetTier) -> Self {
        match tier {
            BudgetTier::Low => CostRanges {
                accommodation: (800, 1500),
                food: (300, 600),
                activities: (500, 1000),
                transportation: (200, 500),
            },
            BudgetTier::Medium => CostRanges {
                accommodation: (1500, 3000),
                food: (500, 1000),
                activities: (1000, 2000),
                transportation: (300, 800),
            },
            BudgetTier::High => CostRanges {
                accommodation: (3000, 6000),
                food: (1000, 2500),
                activities: (2000, 5000),
                transportation: (500, 1500),
            },
        }
    }

    /// Upper bound of every category, summed over the whole trip
    pub fn total_estimate(&self, days: u32) -> u32 {
        (self.accommodation.1 + self.food.1 + self.activities.1 + self.transportation.1) * days
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Day-by-day plan templated on the destination and budget
pub fn trip_recommendation(budget: &str, place: &str, days: u32) -> TripRecommendation {
    let tier = BudgetTier::parse_or_default(Some(budget));
    let costs = CostRanges::for_tier(tier);

    let itinerary = (1..=days)
        .map(|day| ItineraryDay {
            day,
            morning: format!("Explore {}'s famous landmarks and cultural sites", place),
            afternoon: format!("Visit local markets and experience {} culture", place),
            evening: format!("Enjoy authentic {} cuisine and local entertainment", place),
            accommodation: format!("{} budget hotels or guesthouses", tier),
            meals: format!("Traditional {} dishes at local restaurants", place),
        })
        .collect();

    TripRecommendation {
        itinerary,
        budget_breakdown: BudgetBreakdown {
            accommodation: format!("{} per night", format_inr_range(costs.accommodation)),
            food: format!("{} per day", format_inr_range(costs.food)),
            activities: format!("{} per day", format_inr_range(costs.activities)),
            transportation: format!("{} per day", format_inr_range(costs.transportation)),
            total_estimate: format!(
                "Approximately {} for {} days",
                format_inr(costs.total_estimate(days)),
                days
            ),
        },
        must_visit: vec![
            format!("Historic landmarks in {}", place),
            "Local markets and shopping districts".to_string(),
            "Cultural and religious sites".to_string(),
            "Natural attractions and parks".to_string(),
            "Museums and art galleries".to_string(),
        ],
        local_cuisine: vec![
            format!("Traditional {} specialty dishes", place),
            "Popular street food items".to_string(),
            "Local desserts and sweets".to_string(),
            "Regional beverages and drinks".to_string(),
            "Famous restaurant recommendations".to_string(),
        ],
        transport_tips: "Use public transportation like buses and metro for budget travel. \
            Consider ride-sharing apps for convenience. Pre-book intercity travel for better \
            rates and availability."
            .to_string(),
        cultural_notes: "Respect local customs and traditions. Dress modestly when visiting \
            religious sites. Learn basic local greetings. Always ask permission before taking \
            photos of people."
            .to_string(),
        packing_suggestions: strings(&[
            "Comfortable walking shoes",
            "Weather-appropriate clothing",
            "Essential medications and first aid",
            "Travel documents and copies",
            "Power bank and universal adapter",
            "Reusable water bottle",
            "Sunglasses and sunscreen",
            "Day backpack for excursions",
        ]),
    }
}

/// Clothing that depends on the season; unknown seasons pack for summer
fn seasonal_clothing(season: &str) -> [&'static str; 5] {
    match season.trim().to_ascii_lowercase().as_str() {
        "winter" => [
            "Warm sweaters and jackets",
            "Thermal underwear",
            "Woolen caps and gloves",
            "Moisturizer and lip balm",
            "Warm socks and boots",
        ],
        "monsoon" => [
            "Raincoat or umbrella",
            "Quick-dry clothing",
            "Waterproof backpack cover",
            "Extra pairs of socks",
            "Waterproof shoes",
        ],
        "spring" => [
            "Light layers and jackets",
            "Comfortable walking shoes",
            "Allergy medication",
            "Light scarf for breeze",
            "Versatile clothing options",
        ],
        _ => [
            "Light cotton t-shirts (4-5)",
            "Shorts and light pants",
            "Sun hat and sunglasses",
            "Sunscreen SPF 50+",
            "Light jacket for AC areas",
        ],
    }
}

/// Packing list with every item unchecked
pub fn packing_list(season: &str) -> PackingList {
    let mut clothing = strings(&seasonal_clothing(season));
    clothing.extend(strings(&[
        "Comfortable walking shoes",
        "Sleepwear",
        "Underwear (5-6 pairs)",
        "Socks (5-6 pairs)",
        "One formal outfit for nice restaurants",
    ]));

    PackingListDraft {
        clothing,
        toiletries: strings(&[
            "Toothbrush and toothpaste",
            "Shampoo and conditioner",
            "Body soap or shower gel",
            "Deodorant",
            "Razor and shaving cream",
            "Hair brush or comb",
            "Skincare products",
            "Makeup (if applicable)",
        ]),
        electronics: strings(&[
            "Smartphone and charger",
            "Power bank (10,000mAh+)",
            "Universal travel adapter",
            "Camera and accessories",
            "Headphones or earbuds",
            "E-book reader or tablet",
        ]),
        documents: strings(&[
            "Passport/ID card",
            "Travel insurance documents",
            "Flight/train tickets",
            "Hotel booking confirmations",
            "Emergency contact list",
            "Credit/debit cards",
            "Driver's license (if renting vehicle)",
        ]),
        medications: strings(&[
            "Prescription medications",
            "Pain relievers (aspirin/ibuprofen)",
            "Band-aids and antiseptic",
            "Motion sickness pills",
            "Allergy medication",
            "Diarrhea medication",
            "Cold and flu medicine",
        ]),
        miscellaneous: strings(&[
            "Reusable water bottle",
            "Healthy snacks",
            "Book or magazine",
            "Travel pillow and eye mask",
            "Small backpack for day trips",
            "Travel laundry soap",
            "Ziplock bags",
            "Small flashlight",
        ]),
    }
    .into()
}

/// General travel safety advice
pub fn safety_tips() -> SafetyTips {
    SafetyTips {
        general_safety: strings(&[
            "Keep valuables in hotel safe and carry only necessary cash",
            "Stay aware of your surroundings, especially in crowded tourist areas",
            "Make digital copies of passport and important documents",
            "Share your daily itinerary with family or friends back home",
            "Avoid displaying expensive jewelry, cameras, or electronics",
            "Use door stoppers or portable locks for added security",
        ]),
        health_precautions: strings(&[
            "Drink only bottled or properly purified water",
            "Apply sunscreen regularly and stay hydrated throughout the day",
            "Carry all necessary medications with original prescriptions",
            "Wash hands frequently or use alcohol-based hand sanitizer",
            "Choose busy food vendors with high turnover for street food",
            "Get travel insurance that covers medical emergencies",
        ]),
        local_laws: strings(&[
            "Research and respect local customs, traditions, and etiquette",
            "Dress appropriately for religious sites and conservative areas",
            "Always ask permission before photographing people or private property",
            "Understand and follow local traffic laws and regulations",
            "Be aware of restricted areas or activities for tourists",
            "Know the local emergency numbers and procedures",
        ]),
        emergency_contacts: strings(&[
            "Local police: 100",
            "Medical emergency: 108 or 102",
            "Fire department: 101",
            "Your country's embassy/consulate in destination",
            "Hotel front desk and security",
            "Local tour guide or fixer",
            "Travel insurance emergency line",
        ]),
        scam_awareness: strings(&[
            "Be cautious of unsolicited help with luggage or directions",
            "Always verify prices before accepting services or making purchases",
            "Use only official transportation services and licensed tour guides",
            "Avoid too-good-to-be-true offers or deals from strangers",
            "Be wary of common distraction techniques in crowded areas",
            "Research common tourist scams in your destination beforehand",
        ]),
        transportation_safety: strings(&[
            "Use licensed taxis or reputable ride-sharing services",
            "Avoid traveling alone late at night, especially in unfamiliar areas",
            "Keep vehicle doors locked and windows up while moving",
            "Note your driver's details and share with someone you trust",
            "Use well-lit and busy transportation hubs whenever possible",
            "Pre-book airport transfers for safe arrival and departure",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_estimate_sums_upper_bounds() {
        let medium = CostRanges::for_tier(BudgetTier::Medium);
        assert_eq!(medium.total_estimate(1), 6800);
        assert_eq!(medium.total_estimate(5), 34_000);
    }

    #[test]
    fn test_trip_recommendation_templates() {
        let plan = trip_recommendation("low", "Jaipur", 3);

        assert_eq!(plan.itinerary.len(), 3);
        assert_eq!(plan.itinerary[2].day, 3);
        assert!(plan.itinerary[0].morning.contains("Jaipur's famous landmarks"));
        assert_eq!(plan.itinerary[0].accommodation, "low budget hotels or guesthouses");
        assert_eq!(plan.budget_breakdown.accommodation, "₹800 - ₹1,500 per night");
        assert_eq!(
            plan.budget_breakdown.total_estimate,
            "Approximately ₹10,800 for 3 days"
        );
        assert_eq!(plan.must_visit[0], "Historic landmarks in Jaipur");
    }

    #[test]
    fn test_unknown_budget_is_medium() {
        let plan = trip_recommendation("platinum", "Goa", 1);
        assert_eq!(plan.budget_breakdown.food, "₹500 - ₹1,000 per day");
    }

    #[test]
    fn test_packing_list_by_season() {
        let winter = packing_list("Winter");
        assert_eq!(winter.clothing[0].item, "Warm sweaters and jackets");
        assert_eq!(winter.clothing.len(), 10);

        let unknown = packing_list("dry");
        assert_eq!(unknown.clothing[0].item, "Light cotton t-shirts (4-5)");

        assert!(winter
            .documents
            .iter()
            .chain(winter.medications.iter())
            .all(|i| !i.completed));
    }

    #[test]
    fn test_safety_tips_categories() {
        let tips = safety_tips();
        assert_eq!(tips.general_safety.len(), 6);
        assert_eq!(tips.emergency_contacts[0], "Local police: 100");
    }
}
