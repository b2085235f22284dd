use crate::context::use_content;
use dioxus::prelude::*;

/// Sign-up banner. The form is inert; nothing is sent anywhere.
#[component]
pub fn Newsletter() -> Element {
    let newsletter = use_content().newsletter.clone();

    rsx! {
        section { id: "newsletter", class: "newsletter",
            div { class: "container",
                div { class: "newsletter-card",
                    h3 { "{newsletter.title}" }
                    p { "{newsletter.text}" }
                    div { class: "newsletter-row",
                        input { r#type: "email", placeholder: "{newsletter.placeholder}" }
                        button { class: "btn-primary", "{newsletter.button}" }
                    }
                }
            }
        }
    }
}
