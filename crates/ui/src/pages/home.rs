use crate::components::{AboutSection, Features, Hero, ShopSection};
use argyle_domain::Page;
use dioxus::prelude::*;

#[component]
pub fn HomePage(on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        Hero { on_shop: move |()| on_navigate.call(Page::Shop) }
        Features {}
        ShopSection { on_navigate }
        AboutSection {}
    }
}
