use crate::components::ProductCard;
use crate::context::use_content;
use argyle_domain::Page;
use dioxus::prelude::*;

/// Inventory items previewed on the home page.
pub const HOME_PREVIEW_LIMIT: usize = 4;

#[component]
pub fn ShopSection(on_navigate: EventHandler<Page>) -> Element {
    let content = use_content();
    let shop = &content.shop;

    rsx! {
        section { id: "shop-preview", class: "section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { "{shop.section_title}" }
                    p { "{shop.section_subtitle}" }
                }
                div { class: "product-grid",
                    for item in shop.preview(HOME_PREVIEW_LIMIT).iter().cloned() {
                        ProductCard { key: "{item.id}", item }
                    }
                }
                div { class: "view-all",
                    button { class: "btn-outline", onclick: move |_| on_navigate.call(Page::Shop),
                        "{shop.view_all_button}"
                    }
                }
            }
        }
    }
}
