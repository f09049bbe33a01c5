use dioxus::prelude::*;

use crate::ui::components::{Card, SectionHeader};

#[component]
pub fn ServicesPage() -> Element {
    rsx! {
        div { class: "page",
            SectionHeader {
                title: "Our Services",
                description: "Comprehensive energy brokerage solutions for Texas businesses.",
            }

            div { class: "card-grid",
                Card {
                    title: "Commercial Energy Procurement",
                    description: "We negotiate with leading providers to secure competitive rates tailored to your usage.",
                }
                Card {
                    title: "Risk Management",
                    description: "Protect your business from market volatility with expert hedging strategies.",
                }
                Card {
                    title: "Energy Efficiency Consulting",
                    description: "Optimize consumption and uncover savings through efficiency audits and guidance.",
                }
            }
        }
    }
}
