use dioxus::prelude::*;

use crate::ui::components::{Card, SectionHeader};

#[component]
pub fn AnalysisPage() -> Element {
    rsx! {
        div { class: "page",
            SectionHeader {
                title: "Energy Market Analysis",
                description: "Leverage advanced analytics tools and insights to understand energy market trends and make data-driven decisions.",
            }

            div { class: "card-grid",
                Card {
                    title: "Market Trends",
                    description: "Analyze long-term market trends and patterns across different regions.",
                }
                Card {
                    title: "Price Analytics",
                    description: "Deep dive into pricing data with advanced analytical tools.",
                }
                Card {
                    title: "Consumption Analysis",
                    description: "Track and analyze energy consumption patterns and costs.",
                }
                Card {
                    title: "Forecasting Models",
                    description: "Access sophisticated forecasting models for future pricing trends.",
                }
                Card {
                    title: "Comparative Analysis",
                    description: "Compare pricing and trends across different utilities and regions.",
                }
                Card {
                    title: "Custom Analytics",
                    description: "Create custom analytics dashboards tailored to your needs.",
                }
            }

            section { class: "feature-section",
                h2 { "Advanced Analytics Features" }
                div { class: "feature-grid",
                    div { class: "feature-panel",
                        h3 { "Data Visualization" }
                        ul {
                            li { "Interactive charts and graphs" }
                            li { "Real-time data updates" }
                            li { "Customizable dashboards" }
                            li { "Export capabilities" }
                        }
                    }
                    div { class: "feature-panel",
                        h3 { "Predictive Analytics" }
                        ul {
                            li { "Machine learning models" }
                            li { "Trend predictions" }
                            li { "Risk analysis" }
                            li { "Market forecasting" }
                        }
                    }
                }
            }
        }
    }
}
