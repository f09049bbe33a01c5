use dioxus::prelude::*;

#[component]
pub fn SectionHeader(title: String, description: String) -> Element {
    rsx! {
        div { class: "section-header",
            h1 { class: "section-header-title", "{title}" }
            p { class: "section-header-description", "{description}" }
        }
    }
}
