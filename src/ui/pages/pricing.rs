use dioxus::prelude::*;

use crate::ui::components::{Card, SectionHeader};

#[component]
pub fn PricingPage() -> Element {
    rsx! {
        div { class: "page",
            SectionHeader {
                title: "Energy Pricing Analysis",
                description: "Access comprehensive energy pricing data and analysis tools to make informed decisions for your business.",
            }

            div { class: "card-grid",
                Card {
                    title: "Real-Time Pricing",
                    description: "Monitor current energy prices across different regions and utilities.",
                }
                Card {
                    title: "Historical Trends",
                    description: "Analyze historical price patterns and identify market trends.",
                }
                Card {
                    title: "Price Forecasting",
                    description: "Access predictive analytics for future energy pricing trends.",
                }
                Card {
                    title: "Utility Comparison",
                    description: "Compare rates and terms across multiple utility providers.",
                }
                Card {
                    title: "Custom Reports",
                    description: "Generate detailed pricing reports tailored to your needs.",
                }
                Card {
                    title: "Market Insights",
                    description: "Get expert analysis and insights on energy market conditions.",
                }
            }

            section { class: "feature-section feature-section-muted",
                h2 { "Why Choose Our Platform?" }
                div { class: "feature-grid",
                    div {
                        h3 { "Comprehensive Data" }
                        p { "Access pricing data from multiple sources, utilities, and regions in one place." }
                    }
                    div {
                        h3 { "Advanced Analytics" }
                        p { "Use our powerful analytics tools to understand trends and make better decisions." }
                    }
                    div {
                        h3 { "Real-Time Updates" }
                        p { "Stay informed with the latest pricing changes and market movements." }
                    }
                    div {
                        h3 { "Expert Support" }
                        p { "Get assistance from our team of energy market specialists." }
                    }
                }
            }
        }
    }
}
