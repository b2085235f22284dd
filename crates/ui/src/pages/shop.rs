use super::PageBanner;
use crate::components::ProductCard;
use crate::context::use_content;
use dioxus::prelude::*;

/// The full inventory, one card per item in document order.
#[component]
pub fn ShopPage() -> Element {
    let content = use_content();
    let shop = &content.shop;

    rsx! {
        div { class: "page",
            PageBanner { title: shop.page_title.clone(), subtitle: shop.section_subtitle.clone() }
            div { class: "container page-body",
                div { class: "product-grid",
                    for item in shop.inventory.iter().cloned() {
                        ProductCard { key: "{item.id}", item }
                    }
                }
            }
        }
    }
}
