//! Full-chain tests: typed client → proxy → stub upstream.

use std::net::SocketAddr;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use texas_energy_partner::domain::{PricingQuery, RateOffer};
use texas_energy_partner::infra::prices::PricesClient;
use texas_energy_partner::proxy::{router, ProxyState};

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });
    addr
}

async fn spawn_stack(upstream_app: Router) -> PricesClient {
    let upstream = spawn(upstream_app).await;
    let proxy = spawn(router(ProxyState::new(&format!("http://{upstream}")))).await;
    PricesClient::with_base_url(&format!("http://{proxy}/")).unwrap()
}

fn sample_query() -> PricingQuery {
    PricingQuery {
        start_month: "January 2025".to_string(),
        utility: "Oncor".to_string(),
        zip_code: "75201".to_string(),
        load_factor: "Medium".to_string(),
        annual_volume: "100000".to_string(),
    }
}

#[tokio::test]
async fn offers_come_back_in_display_shape() {
    async fn stub() -> Json<Value> {
        Json(json!([
            {"rep": "Atlantic", "term": 12, "price_cents_per_kwh": 7.25},
            {"rep": "Engie", "term": 24, "price_cents_per_kwh": 6.981}
        ]))
    }

    let client = spawn_stack(Router::new().route("/get-prices", post(stub))).await;
    let offers = client.get_prices(&sample_query()).await.unwrap();

    assert_eq!(
        offers,
        vec![
            RateOffer {
                provider: "Atlantic".to_string(),
                term: "12".to_string(),
                rate: 7.25,
            },
            RateOffer {
                provider: "Engie".to_string(),
                term: "24".to_string(),
                rate: 6.981,
            },
        ]
    );
}

#[tokio::test]
async fn empty_results_are_not_an_error() {
    async fn stub() -> Json<Value> {
        Json(json!([]))
    }

    let client = spawn_stack(Router::new().route("/get-prices", post(stub))).await;
    let offers = client.get_prices(&sample_query()).await.unwrap();
    assert!(offers.is_empty());
}

#[tokio::test]
async fn upstream_rejection_surfaces_its_message() {
    async fn stub() -> (StatusCode, &'static str) {
        (StatusCode::UNPROCESSABLE_ENTITY, "Unknown ZIP code. Please verify your 5-digit ZIP.")
    }

    let client = spawn_stack(Router::new().route("/get-prices", post(stub))).await;
    let err = client.get_prices(&sample_query()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown ZIP code. Please verify your 5-digit ZIP."
    );
}
