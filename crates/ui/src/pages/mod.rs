//! One view per [`argyle_domain::Page`].

mod about;
mod community;
mod contact;
mod home;
mod shop;

pub use about::AboutPage;
pub use community::{CommunityPage, PostCard};
pub use contact::ContactPage;
pub use home::HomePage;
pub use shop::ShopPage;

use dioxus::prelude::*;

/// Navy title band at the top of every inner page.
#[component]
fn PageBanner(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "page-banner",
            div { class: "argyle-bg" }
            div { class: "container",
                h1 { "{title}" }
                if !subtitle.is_empty() {
                    p { "{subtitle}" }
                }
            }
        }
    }
}
