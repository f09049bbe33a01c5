use dioxus::prelude::*;

use crate::{
    ui::{
        pages::{
            AboutPage, AnalysisPage, ContactPage, HomePage, PricingPage, ResultsPage,
            ServicesPage,
        },
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/analysis")]
    Analysis {},
    #[route("/pricing")]
    Pricing {},
    #[route("/pricing/results?:start_month&:utility&:zip_code&:load_factor&:annual_volume")]
    PricingResults {
        start_month: String,
        utility: String,
        zip_code: String,
        load_factor: String,
        annual_volume: String,
    },
    #[route("/contact")]
    Contact {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}

#[component]
pub fn Services() -> Element {
    rsx! { Shell { ServicesPage {} } }
}

#[component]
pub fn Analysis() -> Element {
    rsx! { Shell { AnalysisPage {} } }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { Shell { PricingPage {} } }
}

#[component]
pub fn PricingResults(
    start_month: String,
    utility: String,
    zip_code: String,
    load_factor: String,
    annual_volume: String,
) -> Element {
    rsx! {
        Shell {
            ResultsPage {
                start_month,
                utility,
                zip_code,
                load_factor,
                annual_volume,
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! { Shell { ContactPage {} } }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn results_route_carries_all_five_parameters_verbatim() {
        let route = Route::PricingResults {
            start_month: "January 2025".to_string(),
            utility: "Oncor".to_string(),
            zip_code: "75201".to_string(),
            load_factor: "Medium".to_string(),
            annual_volume: "100000".to_string(),
        };

        let rendered = route.to_string();
        assert!(rendered.starts_with("/pricing/results?"), "got: {rendered}");

        let parsed = url::Url::parse(&format!("http://localhost{rendered}")).unwrap();
        let pairs: HashMap<String, String> = parsed.query_pairs().into_owned().collect();
        assert_eq!(pairs.get("start_month").map(String::as_str), Some("January 2025"));
        assert_eq!(pairs.get("utility").map(String::as_str), Some("Oncor"));
        assert_eq!(pairs.get("zip_code").map(String::as_str), Some("75201"));
        assert_eq!(pairs.get("load_factor").map(String::as_str), Some("Medium"));
        assert_eq!(pairs.get("annual_volume").map(String::as_str), Some("100000"));
    }
}
