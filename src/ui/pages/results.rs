use dioxus::prelude::*;

use crate::domain::PricingQuery;
use crate::infra::prices::{PricesClient, PricesError};
use crate::ui::components::{RateTable, SectionHeader};

/// Results view for one search. Issues exactly one fetch per mount; the
/// resource owns the in-flight future and drops it on teardown, so a slow
/// response can never update a view that is already gone.
#[component]
pub fn ResultsPage(
    start_month: String,
    utility: String,
    zip_code: String,
    load_factor: String,
    annual_volume: String,
) -> Element {
    let query = PricingQuery {
        start_month,
        utility,
        zip_code,
        load_factor,
        annual_volume,
    };

    let offers = use_resource(move || {
        let query = query.clone();
        async move { fetch_offers(query).await }
    });

    let state = offers.read();
    match &*state {
        None => rsx! {
            div { class: "loading",
                div { class: "loading-spinner" }
                p { "Loading pricing data..." }
            }
        },
        Some(Err(message)) => rsx! {
            div { class: "error-wrap",
                div { class: "error-box", "{message}" }
            }
        },
        Some(Ok(list)) => rsx! {
            div { class: "page",
                SectionHeader {
                    title: "Pricing Results",
                    description: format!("Found {} pricing options matching your criteria", list.len()),
                }
                RateTable { offers: list.clone() }
            }
        },
    }
}

async fn fetch_offers(query: PricingQuery) -> Result<Vec<crate::domain::RateOffer>, String> {
    let client = PricesClient::new().map_err(|err| err.to_string())?;
    client.get_prices(&query).await.map_err(|err| match err {
        PricesError::Api(message) => message,
        PricesError::Http(_) => "Failed to fetch pricing data".to_string(),
        other => other.to_string(),
    })
}
