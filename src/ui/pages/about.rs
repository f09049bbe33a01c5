use dioxus::prelude::*;

use crate::ui::components::SectionHeader;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        div { class: "page",
            SectionHeader {
                title: "About Texas Energy Partner",
                description: "We help Texas businesses secure affordable, reliable energy through expert market guidance.",
            }

            div { class: "about-grid",
                div { class: "about-column",
                    section {
                        h2 { "Our Mission" }
                        p {
                            "We are dedicated to providing businesses with accurate, timely, and actionable "
                            "energy pricing data and analytics. Our team negotiates on your behalf so you can "
                            "make informed decisions about energy consumption and costs."
                        }
                    }
                    section {
                        h2 { "Our Approach" }
                        p {
                            "We combine cutting-edge technology with deep industry expertise to deliver "
                            "comprehensive energy market insights. Our platform aggregates data from multiple "
                            "sources and presents it in an intuitive, accessible format."
                        }
                    }
                }

                div { class: "about-panel",
                    h2 { "Why Choose Us" }
                    div { class: "about-panel-items",
                        div { class: "about-panel-item",
                            h3 { "Comprehensive Coverage" }
                            p { "Access data from multiple utilities and regions across the market." }
                        }
                        div { class: "about-panel-item",
                            h3 { "Advanced Analytics" }
                            p { "Leverage powerful tools for deeper market insights and analysis." }
                        }
                        div { class: "about-panel-item",
                            h3 { "Expert Support" }
                            p { "Get assistance from our team of energy market specialists." }
                        }
                        div { class: "about-panel-item",
                            h3 { "Real-Time Updates" }
                            p { "Stay informed with the latest market changes and trends." }
                        }
                    }
                }
            }

            section { class: "feature-section",
                h2 { "Our Commitment" }
                div { class: "feature-grid feature-grid-three",
                    div {
                        h3 { "Accuracy" }
                        p { "We maintain the highest standards of data accuracy and validation." }
                    }
                    div {
                        h3 { "Innovation" }
                        p { "Continuously improving our platform with the latest technology." }
                    }
                    div {
                        h3 { "Support" }
                        p { "Dedicated to helping our clients succeed with responsive support." }
                    }
                }
            }
        }
    }
}
