use crate::context::use_content;
use crate::theme::card_fill;
use argyle_domain::content::InventoryItem;
use dioxus::prelude::*;

/// One inventory item: placeholder card art in the item's color, category badge,
/// title and price.
#[component]
pub fn ProductCard(item: InventoryItem) -> Element {
    let content = use_content();
    let currency = &content.common.currency_prefix;
    let add_to_cart = &content.shop.add_to_cart;
    let fill = card_fill(&item.color);

    rsx! {
        div { class: "product-card", "data-item-id": "{item.id}",
            div { class: "product-stage",
                div { class: "product-art", style: "background-color: {fill};",
                    div { class: "product-art-window" }
                    div { class: "product-art-badge" }
                }
                div { class: "product-tag", "{item.category}" }
            }
            div { class: "product-body",
                h3 { "{item.title}" }
                div { class: "product-meta",
                    span { class: "product-price", "{currency}{item.price}" }
                    span { class: "product-cta", "{add_to_cart}" }
                }
            }
        }
    }
}
