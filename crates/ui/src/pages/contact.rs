use super::PageBanner;
use crate::context::use_content;
use crate::icons::{Icon, IconView};
use dioxus::prelude::*;

const HELP_TEXT: &str = "We're here to help with any questions.";
const FAQ_TITLE: &str = "FAQ";
const FAQ_TEXT: &str = "Typically, we respond to all inquiries within 24-48 hours. For immediate \
                        assistance with an existing order, please include your order number in \
                        the subject line.";

/// Email card, FAQ card and a contact form that never submits.
#[component]
pub fn ContactPage() -> Element {
    let content = use_content();
    let page = &content.contact_page;
    let form = &page.form;

    rsx! {
        div { class: "page",
            PageBanner { title: page.title.clone(), subtitle: page.subtitle.clone() }
            div { class: "container page-body",
                div { class: "contact-grid",
                    div { class: "contact-info",
                        div { class: "info-card",
                            div { class: "info-card-head",
                                div { class: "info-card-icon",
                                    IconView { icon: Icon::Mail }
                                }
                                h3 { "{page.email_label}" }
                            }
                            p { "{HELP_TEXT}" }
                            a { href: "mailto:{page.email_value}", "{page.email_value}" }
                        }
                        div { class: "faq-card",
                            h3 { "{FAQ_TITLE}" }
                            p { "{FAQ_TEXT}" }
                        }
                    }

                    div { class: "contact-form-card",
                        form {
                            class: "contact-form",
                            onsubmit: move |evt: FormEvent| evt.prevent_default(),
                            div {
                                label { class: "label", "{form.name}" }
                                input { r#type: "text", class: "input-field", placeholder: "John Doe" }
                            }
                            div {
                                label { class: "label", "{form.email}" }
                                input { r#type: "email", class: "input-field", placeholder: "john@example.com" }
                            }
                            div {
                                label { class: "label", "{form.subject}" }
                                select { class: "input-field",
                                    for subject in form.subjects.iter() {
                                        option { key: "{subject}", "{subject}" }
                                    }
                                }
                            }
                            div {
                                label { class: "label", "{form.message}" }
                                textarea { class: "input-field", rows: "5", placeholder: "How can we help you?" }
                            }
                            button { r#type: "submit", class: "btn-primary", "{form.submit}" }
                        }
                    }
                }
            }
        }
    }
}
