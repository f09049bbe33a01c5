use dioxus::prelude::*;

#[component]
pub fn Card(title: String, description: String) -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "card-title", "{title}" }
            p { class: "card-description", "{description}" }
        }
    }
}
