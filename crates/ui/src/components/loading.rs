use crate::theme::GLOBAL_CSS;
use dioxus::prelude::*;

pub const LOADING_TEXT: &str = "Loading Experience...";

#[component]
pub fn Loading() -> Element {
    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
        div { class: "loading-container",
            div { class: "spinner" }
            p { "{LOADING_TEXT}" }
        }
    }
}
