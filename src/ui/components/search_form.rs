use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{start_months, LOAD_FACTORS, UTILITIES};

/// The lead-generation search form. Collects five fields and navigates to the
/// results route with all of them as query parameters; no network call
/// originates here. Field constraints are native input attributes only.
#[component]
pub fn SearchForm() -> Element {
    let nav = use_navigator();

    let mut start_month = use_signal(String::new);
    let mut utility = use_signal(String::new);
    let mut zip_code = use_signal(String::new);
    let mut load_factor = use_signal(String::new);
    let mut annual_volume = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let months = start_months();

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                loading.set(true);
                nav.push(Route::PricingResults {
                    start_month: start_month(),
                    utility: utility(),
                    zip_code: zip_code(),
                    load_factor: load_factor(),
                    annual_volume: annual_volume(),
                });
            },
            div { class: "search-form-grid",
                div { class: "search-form-field",
                    label { r#for: "start_month", "Start Month" }
                    select {
                        id: "start_month",
                        name: "start_month",
                        required: true,
                        value: "{start_month}",
                        onchange: move |evt| start_month.set(evt.value()),
                        option { value: "", "Select a month" }
                        for month in months {
                            option { value: "{month}", "{month}" }
                        }
                    }
                }

                div { class: "search-form-field",
                    label { r#for: "utility", "Utility" }
                    select {
                        id: "utility",
                        name: "utility",
                        required: true,
                        value: "{utility}",
                        onchange: move |evt| utility.set(evt.value()),
                        option { value: "", "Select a utility" }
                        for choice in UTILITIES {
                            option { value: "{choice}", "{choice}" }
                        }
                    }
                }

                div { class: "search-form-field",
                    label { r#for: "zip_code", "ZIP Code" }
                    input {
                        id: "zip_code",
                        name: "zip_code",
                        r#type: "text",
                        required: true,
                        pattern: "[0-9]{{5}}",
                        placeholder: "Enter 5-digit ZIP code",
                        value: "{zip_code}",
                        oninput: move |evt| zip_code.set(evt.value()),
                    }
                }

                div { class: "search-form-field",
                    label { r#for: "load_factor", "Load Factor" }
                    select {
                        id: "load_factor",
                        name: "load_factor",
                        required: true,
                        value: "{load_factor}",
                        onchange: move |evt| load_factor.set(evt.value()),
                        option { value: "", "Select load factor" }
                        for tier in LOAD_FACTORS {
                            option { value: "{tier}", "{tier}" }
                        }
                    }
                }

                div { class: "search-form-field",
                    label { r#for: "annual_volume", "Annual Volume (kWh)" }
                    input {
                        id: "annual_volume",
                        name: "annual_volume",
                        r#type: "number",
                        required: true,
                        min: "0",
                        placeholder: "Enter annual volume",
                        value: "{annual_volume}",
                        oninput: move |evt| annual_volume.set(evt.value()),
                    }
                }

                div { class: "search-form-submit",
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Loading..." } else { "Get Pricing" }
                    }
                }
            }
        }
    }
}
