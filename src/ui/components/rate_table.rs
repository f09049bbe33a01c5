use dioxus::prelude::*;

use crate::domain::RateOffer;

/// Results table: one row per offer, rates shown to four decimal places.
#[component]
pub fn RateTable(offers: Vec<RateOffer>) -> Element {
    rsx! {
        div { class: "rate-table-wrap",
            table { class: "rate-table",
                thead {
                    tr {
                        th { "Provider" }
                        th { "Term" }
                        th { "Rate (¢/kWh)" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for offer in offers {
                        tr {
                            td { "{offer.provider}" }
                            td { "{offer.term}" }
                            td { {format_rate(offer.rate)} }
                            td {
                                button { class: "rate-table-select", "Select Plan" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_render_to_four_decimal_places() {
        assert_eq!(format_rate(7.25), "7.2500");
        assert_eq!(format_rate(0.0), "0.0000");
        assert_eq!(format_rate(10.12345), "10.1235");
    }
}
