//! Pricing proxy: adapts the public `/api/prices` query contract to the
//! upstream pricing service's JSON contract.
//!
//! One inbound GET produces exactly one outbound POST. No retries, no
//! caching, no state between requests.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::domain::{LoadFactor, QuoteRequest};

const CONNECT_ERROR: &str = "Failed to connect to pricing service";
const UPSTREAM_ERROR: &str = "Pricing API error";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub bind_addr: String,
    pub pricing_api_url: String,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("PROXY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let pricing_api_url =
            std::env::var("PRICING_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self {
            bind_addr,
            pricing_api_url,
        }
    }
}

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    pricing_api_url: String,
}

impl ProxyState {
    pub fn new(pricing_api_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            pricing_api_url: pricing_api_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Public query parameters. Missing fields behave like empty strings; the
/// volume falls back to 0 when absent or malformed.
#[derive(Debug, Deserialize)]
pub struct PriceParams {
    #[serde(default)]
    pub start_month: String,
    #[serde(default)]
    pub utility: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub load_factor: String,
    #[serde(default)]
    pub annual_volume: String,
}

/// Builds the upstream request body from the public parameters, rewriting the
/// load factor through the normalization rule.
pub fn quote_request(params: &PriceParams) -> QuoteRequest {
    QuoteRequest {
        start_month: params.start_month.clone(),
        utility: params.utility.clone(),
        zipcode: params.zip_code.clone(),
        load_factor: LoadFactor::normalize(&params.load_factor),
        annual_volume: params.annual_volume.parse().unwrap_or(0.0),
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/prices", get(get_prices))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn serve(config: ProxyConfig) -> anyhow::Result<()> {
    let state = ProxyState::new(&config.pricing_api_url);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        pricing_api_url = %config.pricing_api_url,
        "pricing proxy listening"
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn get_prices(
    State(state): State<ProxyState>,
    Query(params): Query<PriceParams>,
) -> (StatusCode, Json<serde_json::Value>) {
    let body = quote_request(&params);
    tracing::info!(
        utility = %body.utility,
        zipcode = %body.zipcode,
        load_factor = %body.load_factor,
        "forwarding price request"
    );

    let url = format!("{}/get-prices", state.pricing_api_url);
    let response = match state.http.post(&url).json(&body).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "pricing service unreachable");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": CONNECT_ERROR })),
            );
        }
    };

    let upstream_status = response.status();
    if !upstream_status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = if text.is_empty() {
            UPSTREAM_ERROR.to_string()
        } else {
            text
        };
        let status = StatusCode::from_u16(upstream_status.as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        return (status, Json(serde_json::json!({ "error": message })));
    }

    // Success bodies are relayed verbatim; a body that fails to parse as JSON
    // is indistinguishable from a broken upstream.
    match response.json::<serde_json::Value>().await {
        Ok(data) => (StatusCode::OK, Json(data)),
        Err(err) => {
            tracing::error!(error = %err, "pricing service returned non-JSON body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": CONNECT_ERROR })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(load_factor: &str, annual_volume: &str) -> PriceParams {
        PriceParams {
            start_month: "January 2025".to_string(),
            utility: "Oncor".to_string(),
            zip_code: "75201".to_string(),
            load_factor: load_factor.to_string(),
            annual_volume: annual_volume.to_string(),
        }
    }

    #[test]
    fn quote_request_rewrites_load_factor() {
        let body = quote_request(&params("Medium", "100000"));
        assert_eq!(body.load_factor, LoadFactor::Hi);
        assert_eq!(body.zipcode, "75201");
        assert_eq!(body.annual_volume, 100_000.0);
    }

    #[test]
    fn malformed_volume_falls_back_to_zero() {
        let body = quote_request(&params("Low", "not-a-number"));
        assert_eq!(body.load_factor, LoadFactor::Lo);
        assert_eq!(body.annual_volume, 0.0);
    }
}
