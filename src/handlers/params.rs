// src/handlers/params.rs
// DOCUMENTATION: Query-string parsing shared by the lookup endpoints
// PURPOSE: Empty values count as absent; present but malformed values are a 400

use crate::errors::TravelError;
use chrono::NaiveDate;

/// Trimmed value, or None when missing or blank
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Required non-blank parameter
pub fn required<'a>(name: &str, value: &'a Option<String>) -> Result<&'a str, TravelError> {
    present(value).ok_or_else(|| TravelError::InvalidInput(format!("{} is required", name)))
}

fn parse_float(name: &str, raw: &str) -> Result<f64, TravelError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TravelError::InvalidInput(format!("{} must be a number", name)))
}

/// Latitude in [-90, 90], if given
pub fn latitude(name: &str, value: &Option<String>) -> Result<Option<f64>, TravelError> {
    let Some(raw) = present(value) else { return Ok(None) };
    let lat = parse_float(name, raw)?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(TravelError::InvalidInput(format!("{} must be between -90 and 90", name)));
    }
    Ok(Some(lat))
}

/// Longitude in [-180, 180], if given
pub fn longitude(name: &str, value: &Option<String>) -> Result<Option<f64>, TravelError> {
    let Some(raw) = present(value) else { return Ok(None) };
    let lng = parse_float(name, raw)?;
    if !(-180.0..=180.0).contains(&lng) {
        return Err(TravelError::InvalidInput(format!("{} must be between -180 and 180", name)));
    }
    Ok(Some(lng))
}

/// Whole number within `range`, if given
pub fn bounded_u32(
    name: &str,
    value: &Option<String>,
    range: std::ops::RangeInclusive<u32>,
) -> Result<Option<u32>, TravelError> {
    let Some(raw) = present(value) else { return Ok(None) };
    raw.parse::<u32>()
        .ok()
        .filter(|v| range.contains(v))
        .map(Some)
        .ok_or_else(|| {
            TravelError::InvalidInput(format!(
                "{} must be between {} and {}",
                name,
                range.start(),
                range.end()
            ))
        })
}

/// Calendar date in YYYY-MM-DD form
pub fn date(name: &str, value: &Option<String>) -> Result<NaiveDate, TravelError> {
    let raw = required(name, value)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| TravelError::InvalidInput(format!("{} must be a date in YYYY-MM-DD format", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_blank_counts_as_absent() {
        assert_eq!(latitude("lat", &some("  ")).unwrap(), None);
        assert_eq!(latitude("lat", &None).unwrap(), None);
        assert!(required("from", &some("")).is_err());
    }

    #[test]
    fn test_coordinates_are_parsed_and_range_checked() {
        assert_eq!(latitude("lat", &some("28.6139")).unwrap(), Some(28.6139));
        assert_eq!(longitude("lng", &some("-77.5")).unwrap(), Some(-77.5));
        assert!(latitude("lat", &some("north")).is_err());
        assert!(latitude("lat", &some("91")).is_err());
        assert!(longitude("lng", &some("NaN")).is_err());
        assert!(longitude("lng", &some("180.5")).is_err());
    }

    #[test]
    fn test_bounded_u32() {
        assert_eq!(bounded_u32("days", &some("7"), 1..=16).unwrap(), Some(7));
        assert!(bounded_u32("days", &some("0"), 1..=16).is_err());
        assert!(bounded_u32("days", &some("17"), 1..=16).is_err());
        assert!(bounded_u32("days", &some("-3"), 1..=16).is_err());
    }

    #[test]
    fn test_date_format() {
        assert_eq!(
            date("date", &some("2026-03-15")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
        assert!(date("date", &some("15/03/2026")).is_err());
        assert!(date("date", &some("2026-02-30")).is_err());
        assert!(date("date", &None).is_err());
    }
}
