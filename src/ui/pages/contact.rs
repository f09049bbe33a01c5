use dioxus::prelude::*;

use crate::ui::components::SectionHeader;

/// Contact form. Submission only flips local display state; no message is
/// delivered anywhere (deliberate — there is no messaging backend).
#[component]
pub fn ContactPage() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    rsx! {
        div { class: "page",
            SectionHeader {
                title: "Contact Us",
                description: "Have questions? Reach out and our team will get back to you.",
            }

            if submitted() {
                div { class: "notice-success",
                    "Thank you for your message. We'll be in touch soon."
                }
            }

            form {
                class: "contact-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submitted.set(true);
                },
                div { class: "contact-form-field",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "contact-form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "contact-form-field",
                    label { r#for: "message", "Message" }
                    textarea {
                        id: "message",
                        name: "message",
                        required: true,
                        rows: "4",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                }
                button { r#type: "submit", "Send Message" }
            }

            div { class: "contact-details",
                p { "Phone: (555) 123-4567" }
                p { "Email: info@texasenergypartner.com" }
            }
        }
    }
}
