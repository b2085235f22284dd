use crate::context::use_content;
use crate::icons::{Icon, IconView};
use dioxus::prelude::*;

#[component]
pub fn Features() -> Element {
    let content = use_content();

    rsx! {
        section { class: "section features",
            div { class: "container",
                div { class: "feature-grid",
                    for feature in content.features.items.iter() {
                        div { key: "{feature.title}", class: "feature-card",
                            div { class: "feature-icon",
                                IconView { icon: Icon::from_key(&feature.icon_type) }
                            }
                            h3 { "{feature.title}" }
                            p { "{feature.desc}" }
                        }
                    }
                }
            }
        }
    }
}
