use crate::context::use_content;
use dioxus::prelude::*;

#[component]
pub fn AboutSection() -> Element {
    let about = use_content().about.clone();

    rsx! {
        section { id: "about-preview", class: "section about-preview",
            div { class: "container",
                div { class: "about-preview-body",
                    div { class: "about-initials", "{about.initials}" }
                    h2 { "{about.section_title}" }
                    p { "{about.section_text}" }
                    div { class: "accent-rule" }
                }
            }
        }
    }
}
