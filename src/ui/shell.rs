use dioxus::prelude::*;

use crate::app::Route;
use crate::util::{assets, version};

/// Site chrome: header with logo and navigation, footer with contact details.
#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "site",
            header { class: "site-header",
                div { class: "site-header-inner",
                    div { class: "brand",
                        img { class: "brand-logo", src: assets::logo_data_uri(), alt: "Texas Energy Partner" }
                        span { class: "brand-name", "Texas Energy Partner" }
                    }
                    nav { class: "site-nav",
                        NavButton { active: matches!(current_route, Route::Home {}), onclick: move |_| { nav.push(Route::Home {}); }, label: "Home" }
                        NavButton { active: matches!(current_route, Route::Pricing {} | Route::PricingResults { .. }), onclick: move |_| { nav.push(Route::Pricing {}); }, label: "Pricing" }
                        NavButton { active: matches!(current_route, Route::Analysis {}), onclick: move |_| { nav.push(Route::Analysis {}); }, label: "Analysis" }
                        NavButton { active: matches!(current_route, Route::Services {}), onclick: move |_| { nav.push(Route::Services {}); }, label: "Services" }
                        NavButton { active: matches!(current_route, Route::About {}), onclick: move |_| { nav.push(Route::About {}); }, label: "About" }
                        NavButton { active: matches!(current_route, Route::Contact {}), onclick: move |_| { nav.push(Route::Contact {}); }, label: "Contact" }
                    }
                }
            }
            main { class: "site-main",
                {children}
            }
            footer { class: "site-footer",
                p { "Phone: (555) 123-4567 · Email: info@texasenergypartner.com" }
                p { class: "site-footer-version", "{version::version_label()}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button nav-button-active" } else { "nav-button" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
