use crate::context::use_content;
use dioxus::prelude::*;

#[component]
pub fn Hero(on_shop: EventHandler<()>) -> Element {
    let hero = use_content().hero.clone();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "argyle-bg" }
            div { class: "hero-glow" }
            div { class: "container",
                div { class: "hero-copy",
                    div { class: "hero-badge", "{hero.est}" }
                    h1 {
                        "{hero.headline_start} "
                        br {}
                        span { class: "highlight", "{hero.headline_highlight}" }
                    }
                    p { class: "hero-subtext", "{hero.subtext}" }
                    div { class: "hero-actions",
                        button { class: "btn-primary", onclick: move |_| on_shop.call(()), "{hero.cta_primary}" }
                        button { class: "btn-outline", "{hero.cta_secondary}" }
                    }
                }
            }
        }
    }
}
