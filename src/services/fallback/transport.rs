// src/services/fallback/transport.rs
// DOCUMENTATION: Generated flight and train schedules plus templated transport advice

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::rngs::StdRng;
use rand::Rng;

use super::{airport_name, format_inr, seeded_rng, station_name};
use crate::models::{
    BudgetTier, Flight, FlightEndpoint, Train, TrainClass, TrainStop, TransportRecommendationRequest,
    TransportRecommendations,
};

const AIRLINES: [(&str, &str); 9] = [
    ("Air India", "AI"),
    ("IndiGo", "6E"),
    ("SpiceJet", "SG"),
    ("Vistara", "UK"),
    ("AirAsia", "I5"),
    ("Emirates", "EK"),
    ("Qatar Airways", "QR"),
    ("Singapore Airlines", "SQ"),
    ("British Airways", "BA"),
];

const AIRCRAFT: [&str; 4] = ["A320", "B737", "A321", "B787"];
const TERMINALS: [&str; 3] = ["1", "2", "3"];

const TRAIN_NAMES: [&str; 8] = [
    "Rajdhani Express",
    "Shatabdi Express",
    "Duronto Express",
    "Garib Rath",
    "Jan Shatabdi",
    "Tejas Express",
    "Vande Bharat",
    "Intercity Express",
];

const TRAIN_TYPES: [&str; 3] = ["Superfast", "Mail", "Express"];

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::default()) + Duration::minutes(i64::from(hour * 60 + minute))
}

fn iso_timestamp(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// 3 to 6 departures spread through the day, earliest first
pub fn flights(from: &str, to: &str, date: NaiveDate) -> Vec<Flight> {
    let from_code = from.to_ascii_uppercase();
    let to_code = to.to_ascii_uppercase();
    let mut rng = seeded_rng(&format!("flights|{}|{}|{}", from_code, to_code, date));

    let count = rng.random_range(3..=6_u32);
    let mut flights: Vec<(NaiveDateTime, Flight)> = (0..count)
        .map(|i| {
            let (airline, code) = AIRLINES[rng.random_range(0..AIRLINES.len())];
            let departure = at(date, 6 + i * 3, rng.random_range(0..60));
            let hours = rng.random_range(2..=5_i64);
            let arrival = departure + Duration::hours(hours);
            let price = format_inr(rng.random_range(3000..10000));

            let flight = Flight {
                airline: airline.to_string(),
                flight_number: format!("{}{}", code, 100 + i * 50),
                departure: FlightEndpoint {
                    airport: format!("{} Airport", airport_name(&from_code)),
                    iata: from_code.clone(),
                    scheduled: iso_timestamp(departure),
                    terminal: Some(pick(&mut rng, &TERMINALS).to_string()),
                    gate: Some(format!("A{}", rng.random_range(1..=20))),
                },
                arrival: FlightEndpoint {
                    airport: format!("{} Airport", airport_name(&to_code)),
                    iata: to_code.clone(),
                    scheduled: iso_timestamp(arrival),
                    terminal: Some(pick(&mut rng, &TERMINALS).to_string()),
                    gate: Some(format!("B{}", rng.random_range(1..=20))),
                },
                aircraft: Some(pick(&mut rng, &AIRCRAFT).to_string()),
                duration: format!("{}h 0m", hours),
                status: "scheduled".to_string(),
                price: Some(price),
                seats_available: Some(rng.random_range(10..60)),
            };
            (departure, flight)
        })
        .collect();

    flights.sort_by_key(|(departure, _)| *departure);
    flights.into_iter().map(|(_, flight)| flight).collect()
}

fn train_classes(rng: &mut StdRng) -> Vec<TrainClass> {
    let class = |code: &str, available: bool, price: u32| TrainClass {
        class_code: code.to_string(),
        availability: if available { "Y" } else { "N" }.to_string(),
        price: format_inr(price),
    };

    vec![
        class("1A", true, 2499 + rng.random_range(0..1000)),
        class("2A", true, 1799 + rng.random_range(0..800)),
        class("3A", rng.random_bool(0.7), 1299 + rng.random_range(0..600)),
        class("SL", true, 699 + rng.random_range(0..300)),
    ]
}

/// 2 to 4 trains departing every four hours from 06:00
pub fn trains(from: &str, to: &str, date: NaiveDate) -> Vec<Train> {
    let from_code = from.to_ascii_uppercase();
    let to_code = to.to_ascii_uppercase();
    let mut rng = seeded_rng(&format!("trains|{}|{}|{}", from_code, to_code, date));

    let count = rng.random_range(2..=4_u32);
    let mut trains: Vec<Train> = (0..count)
        .map(|i| {
            let name = pick(&mut rng, &TRAIN_NAMES);
            let departure = at(date, 6 + i * 4, rng.random_range(0..60));
            let hours = rng.random_range(4..=11_i64);
            let arrival = departure + Duration::hours(hours);

            Train {
                name: name.to_string(),
                number: format!("12{}", rng.random_range(100..1000)),
                from: TrainStop {
                    station: format!("{} Junction", station_name(&from_code)),
                    code: from_code.clone(),
                    time: departure.format("%H:%M").to_string(),
                },
                to: TrainStop {
                    station: format!("{} Junction", station_name(&to_code)),
                    code: to_code.clone(),
                    time: arrival.format("%H:%M").to_string(),
                },
                duration: format!("{}h 0m", hours),
                classes: train_classes(&mut rng),
                train_type: pick(&mut rng, &TRAIN_TYPES).to_string(),
            }
        })
        .collect();

    trains.sort_by(|a, b| a.from.time.cmp(&b.from.time));
    trains
}

/// Fare ranges per mode: (flight, train, bus, car)
fn fare_ranges(budget: BudgetTier) -> [&'static str; 4] {
    match budget {
        BudgetTier::Low => ["₹3,000 - ₹6,000", "₹500 - ₹2,000", "₹300 - ₹1,000", "₹2,000 - ₹4,000"],
        BudgetTier::Medium => ["₹4,000 - ₹8,000", "₹1,000 - ₹3,000", "₹500 - ₹1,500", "₹3,000 - ₹6,000"],
        BudgetTier::High => ["₹6,000 - ₹15,000", "₹2,000 - ₹5,000", "₹800 - ₹2,000", "₹5,000 - ₹10,000"],
    }
}

/// Templated advice covering every transport mode
pub fn recommendations(req: &TransportRecommendationRequest) -> TransportRecommendations {
    let budget = req.budget_or_default();
    let style = req.travel_style_or_default();
    let companions = req.companions_or_default();
    let [flight, train, bus, car] = fare_ranges(BudgetTier::parse_or_default(Some(budget)));

    TransportRecommendations {
        best_options: vec![
            format!(
                "Flight: Fastest option (1-2 hours) from {} to {}",
                airport_name(&req.from),
                airport_name(&req.to)
            ),
            "Train: Comfortable journey (8-12 hours) with scenic views and meals".to_string(),
            "Bus: Budget-friendly option (10-14 hours) with overnight travel available".to_string(),
            "Car: Flexible road trip (8-10 hours) with stopover possibilities".to_string(),
        ],
        cost_comparison: vec![
            format!("Flights: {}", flight),
            format!("Trains: {}", train),
            format!("Buses: {}", bus),
            format!("Car rental: {}", car),
        ],
        travel_duration: vec![
            "Flights: 1-2 hours (fastest)".to_string(),
            "Trains: 8-12 hours (most comfortable)".to_string(),
            "Buses: 10-14 hours (most economical)".to_string(),
            "Car: 8-10 hours (most flexible)".to_string(),
        ],
        booking_tips: vec![
            "Book flights 2-3 weeks in advance for best prices".to_string(),
            "Check train availability and book AC classes for comfort".to_string(),
            "Look for overnight buses to save on accommodation".to_string(),
            "Compare rental car companies for best deals and insurance".to_string(),
        ],
        travel_advice: vec![
            format!(
                "For {} travel, consider {} options that suit your group",
                companions, style
            ),
            "Carry essential snacks and entertainment for long journeys".to_string(),
            "Check weather conditions and travel advisories before departure".to_string(),
            "Keep important documents and medications in carry-on luggage".to_string(),
        ],
        summary: format!(
            "Smart travel options from {} to {} tailored for {} with {} budget and {} preferences",
            req.from, req.to, companions, budget, style
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_flights_shape() {
        let flights = flights("del", "bom", date());
        assert!((3..=6).contains(&flights.len()));

        for (i, flight) in flights.iter().enumerate() {
            assert_eq!(flight.departure.iata, "DEL");
            assert_eq!(flight.departure.airport, "Delhi Airport");
            assert_eq!(flight.arrival.airport, "Mumbai Airport");
            assert!(flight.departure.scheduled.starts_with("2026-03-15T"));
            assert!(flight.departure.scheduled.ends_with(".000Z"));
            assert_eq!(flight.status, "scheduled");

            let seats = flight.seats_available.unwrap();
            assert!((10..60).contains(&seats));

            let price: u32 = flight.price.as_deref().unwrap()
                .trim_start_matches('₹')
                .replace(',', "")
                .parse()
                .unwrap();
            assert!((3000..=9999).contains(&price));

            if i > 0 {
                assert!(flights[i - 1].departure.scheduled <= flight.departure.scheduled);
            }
        }
    }

    #[test]
    fn test_flights_are_deterministic() {
        assert_eq!(flights("DEL", "BOM", date()), flights("DEL", "BOM", date()));
        assert_eq!(flights("del", "bom", date()), flights("DEL", "BOM", date()));
    }

    #[test]
    fn test_trains_shape() {
        let trains = trains("MAA", "BLR", date());
        assert!((2..=4).contains(&trains.len()));

        for (i, train) in trains.iter().enumerate() {
            assert_eq!(train.from.station, "Chennai Central Junction");
            assert_eq!(train.to.code, "BLR");
            assert!(train.number.starts_with("12"));
            assert_eq!(train.number.len(), 5);
            let codes: Vec<&str> = train.classes.iter().map(|c| c.class_code.as_str()).collect();
            assert_eq!(codes, ["1A", "2A", "3A", "SL"]);
            assert!(TRAIN_NAMES.contains(&train.name.as_str()));
            if i > 0 {
                assert!(trains[i - 1].from.time <= train.from.time);
            }
        }

        assert_eq!(trains, super::trains("MAA", "BLR", date()));
    }

    #[test]
    fn test_recommendations_use_budget_ranges() {
        let req = TransportRecommendationRequest {
            from: "DEL".into(),
            to: "PNQ".into(),
            budget: Some("high".into()),
            travel_style: None,
            companions: Some("family".into()),
        };

        let recs = recommendations(&req);
        assert!(recs.best_options[0].contains("from Delhi to Pune"));
        assert_eq!(recs.cost_comparison[0], "Flights: ₹6,000 - ₹15,000");
        assert!(recs.travel_advice[0].starts_with("For family travel, consider comfortable"));
        assert!(recs.summary.contains("high budget"));
    }

    #[test]
    fn test_unknown_budget_uses_medium_ranges() {
        let req = TransportRecommendationRequest {
            from: "X".into(),
            to: "Y".into(),
            budget: Some("luxury".into()),
            travel_style: None,
            companions: None,
        };
        assert_eq!(recommendations(&req).cost_comparison[1], "Trains: ₹1,000 - ₹3,000");
    }
}
