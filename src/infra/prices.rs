//! Thin asynchronous client for the pricing proxy.
//!
//! The results page talks to the proxy through this client; it re-encodes the
//! five public query parameters and maps the backend entry shape
//! (`rep`/`term`/`price_cents_per_kwh`) into the display shape.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{PricingQuery, RateOffer};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/";
const USER_AGENT: &str = "texas-energy-partner/0.3.0";

/// Environment override for the proxy origin, e.g. when the proxy binary
/// runs on a non-default port.
pub const PROXY_URL_ENV: &str = "PRICES_PROXY_URL";

#[derive(Debug, Error)]
pub enum PricesError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

#[derive(Clone)]
pub struct PricesClient {
    http: Client,
    base_url: Url,
}

impl PricesClient {
    pub fn new() -> Result<Self, PricesError> {
        match std::env::var(PROXY_URL_ENV) {
            Ok(base) => Self::with_base_url(&base),
            Err(_) => Self::with_base_url(DEFAULT_BASE_URL),
        }
    }

    pub fn with_base_url(base: &str) -> Result<Self, PricesError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// Issues the single GET for one results view. No retries, no caching.
    pub async fn get_prices(&self, query: &PricingQuery) -> Result<Vec<RateOffer>, PricesError> {
        let mut url = self.base_url.join("api/prices")?;
        for (key, value) in query_pairs(query) {
            url.query_pairs_mut().append_pair(key, &value);
        }

        println!("Requesting rate offers from {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(PricesError::Api("Failed to fetch pricing data".to_string()))
            }
            Err(err) => return Err(PricesError::Http(err)),
        };

        if !status.is_success() {
            return Err(PricesError::Api(error_message(&body)));
        }

        parse_rate_offers(body)
    }
}

/// The five proxy query parameters in wire order. A trailing `%` on the load
/// factor is dropped; everything else passes through verbatim.
pub fn query_pairs(query: &PricingQuery) -> [(&'static str, String); 5] {
    [
        ("start_month", query.start_month.clone()),
        ("utility", query.utility.clone()),
        ("zip_code", query.zip_code.clone()),
        (
            "load_factor",
            query.load_factor.trim_end_matches('%').to_string(),
        ),
        ("annual_volume", query.annual_volume.clone()),
    ]
}

#[derive(Debug, Deserialize)]
struct RateOfferDto {
    rep: String,
    #[serde(deserialize_with = "string_from_json")]
    term: String,
    price_cents_per_kwh: f64,
}

impl From<RateOfferDto> for RateOffer {
    fn from(dto: RateOfferDto) -> Self {
        Self {
            provider: dto.rep,
            term: dto.term,
            rate: dto.price_cents_per_kwh,
        }
    }
}

/// Maps a proxy response body into rate offers.
///
/// Anything other than the expected array shape is a failure: an `error`
/// object surfaces its message, everything else falls back to a generic one.
pub fn parse_rate_offers(body: serde_json::Value) -> Result<Vec<RateOffer>, PricesError> {
    if body.is_array() {
        let entries: Vec<RateOfferDto> = serde_json::from_value(body)
            .map_err(|_| PricesError::Api("Failed to fetch pricing data".to_string()))?;
        return Ok(entries.into_iter().map(RateOffer::from).collect());
    }

    Err(PricesError::Api(error_message(&body)))
}

fn error_message(body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| "An error occurred".to_string())
}

fn string_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_query() -> PricingQuery {
        PricingQuery {
            start_month: "January 2025".to_string(),
            utility: "Oncor".to_string(),
            zip_code: "75201".to_string(),
            load_factor: "Medium".to_string(),
            annual_volume: "100000".to_string(),
        }
    }

    #[test]
    fn query_pairs_pass_fields_through_verbatim() {
        let pairs = query_pairs(&sample_query());
        assert_eq!(
            pairs,
            [
                ("start_month", "January 2025".to_string()),
                ("utility", "Oncor".to_string()),
                ("zip_code", "75201".to_string()),
                ("load_factor", "Medium".to_string()),
                ("annual_volume", "100000".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_strip_trailing_percent_from_load_factor() {
        let mut query = sample_query();
        query.load_factor = "50%".to_string();
        let pairs = query_pairs(&query);
        assert_eq!(pairs[3], ("load_factor", "50".to_string()));
    }

    #[test]
    fn backend_entries_map_to_display_shape() {
        let body = json!([{"rep": "Atlantic", "term": 12, "price_cents_per_kwh": 7.25}]);
        let offers = parse_rate_offers(body).unwrap();
        assert_eq!(
            offers,
            vec![RateOffer {
                provider: "Atlantic".to_string(),
                term: "12".to_string(),
                rate: 7.25,
            }]
        );
    }

    #[test]
    fn empty_array_is_success_with_no_offers() {
        let offers = parse_rate_offers(json!([])).unwrap();
        assert!(offers.is_empty());
    }

    #[test]
    fn error_object_surfaces_its_message() {
        let err = parse_rate_offers(json!({"error": "bad request"})).unwrap_err();
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn unexpected_shape_falls_back_to_generic_message() {
        let err = parse_rate_offers(json!({"unexpected": true})).unwrap_err();
        assert_eq!(err.to_string(), "An error occurred");
    }
}
