use serde::Serialize;
use time::{Month, OffsetDateTime};

use crate::domain::LoadFactor;

/// Transmission/distribution utilities the brokerage currently shops against.
pub const UTILITIES: [&str; 5] = [
    "Centerpoint",
    "AEP Texas Central",
    "AEP Texas North",
    "Oncor",
    "Texas-New Mexico Power",
];

/// User-facing load factor tiers. Low ≈ 30-50%, Medium ≈ 50-70%, High ≈ 70-90%.
pub const LOAD_FACTORS: [&str; 3] = ["Low", "Medium", "High"];

/// The five public query-string fields, exactly as carried on the results route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricingQuery {
    pub start_month: String,
    pub utility: String,
    pub zip_code: String,
    pub load_factor: String,
    pub annual_volume: String,
}

/// JSON body posted to the upstream pricing service.
///
/// Field names follow the backend contract: the public query parameter is
/// `zip_code` but the backend expects `zipcode`.
#[derive(Clone, Debug, Serialize)]
pub struct QuoteRequest {
    pub start_month: String,
    pub utility: String,
    pub zipcode: String,
    pub load_factor: LoadFactor,
    pub annual_volume: f64,
}

/// One rate offer in display shape. `term` is already coerced to text.
#[derive(Clone, Debug, PartialEq)]
pub struct RateOffer {
    pub provider: String,
    pub term: String,
    pub rate: f64,
}

/// The next twelve months starting from today, formatted "January 2025" style,
/// for the start-month dropdown.
pub fn start_months() -> Vec<String> {
    start_months_from(OffsetDateTime::now_utc())
}

fn start_months_from(now: OffsetDateTime) -> Vec<String> {
    let mut months = Vec::with_capacity(12);
    let mut month = now.month();
    let mut year = now.year();
    for _ in 0..12 {
        months.push(format!("{} {}", month_name(month), year));
        month = month.next();
        if month == Month::January {
            year += 1;
        }
    }
    months
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn start_months_covers_one_year_from_now() {
        let months = start_months_from(datetime!(2025-01-15 12:00:00 UTC));
        assert_eq!(months.len(), 12);
        assert_eq!(months.first().map(String::as_str), Some("January 2025"));
        assert_eq!(months.last().map(String::as_str), Some("December 2025"));
    }

    #[test]
    fn start_months_rolls_over_the_year_boundary() {
        let months = start_months_from(datetime!(2025-11-03 00:00:00 UTC));
        assert_eq!(
            months,
            vec![
                "November 2025",
                "December 2025",
                "January 2026",
                "February 2026",
                "March 2026",
                "April 2026",
                "May 2026",
                "June 2026",
                "July 2026",
                "August 2026",
                "September 2026",
                "October 2026",
            ]
        );
    }

    #[test]
    fn quote_request_uses_backend_field_names() {
        let body = QuoteRequest {
            start_month: "January 2025".to_string(),
            utility: "Oncor".to_string(),
            zipcode: "75201".to_string(),
            load_factor: LoadFactor::Hi,
            annual_volume: 100_000.0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["zipcode"], "75201");
        assert_eq!(json["load_factor"], "HI");
        assert!(json.get("zip_code").is_none());
    }
}
