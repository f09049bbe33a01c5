use dioxus::prelude::*;

use crate::ui::components::{Card, SearchForm};

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div { class: "page",
            div { class: "hero",
                h1 { "Find Your Perfect Energy Plan" }
                p { "Compare energy prices and find the best rates for your business." }
            }

            SearchForm {}

            div { class: "card-grid",
                Card {
                    title: "Compare Rates",
                    description: "Get instant access to competitive energy rates from top providers.",
                }
                Card {
                    title: "Expert Analysis",
                    description: "Make informed decisions with our detailed market analysis and insights.",
                }
                Card {
                    title: "Easy Process",
                    description: "Simple, streamlined process to find and select your energy plan.",
                }
            }
        }
    }
}
