use super::PageBanner;
use crate::context::use_content;
use crate::icons::{Icon, IconView};
use crate::theme::card_fill;
use argyle_domain::content::Post;
use dioxus::prelude::*;

/// The community feed, one card per post in document order.
#[component]
pub fn CommunityPage() -> Element {
    let content = use_content();
    let community = &content.community;

    rsx! {
        div { class: "page",
            PageBanner { title: community.title.clone(), subtitle: community.subtitle.clone() }
            div { class: "container page-body",
                div { class: "feed",
                    for post in community.posts.iter().cloned() {
                        PostCard { key: "{post.id}", post }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PostCard(post: Post) -> Element {
    let initial = post.initial();
    let image_fill = post.has_image.then(|| card_fill(post.image_color.as_deref().unwrap_or_default()));

    rsx! {
        article { class: "post-card", "data-post-id": "{post.id}",
            div { class: "post-head",
                div { class: "avatar", "{initial}" }
                div {
                    div { class: "post-author", "{post.author}" }
                    div { class: "post-time", "{post.timestamp}" }
                }
            }
            p { class: "post-text", "{post.text}" }
            if let Some(fill) = image_fill {
                div { class: "post-image", style: "background-color: {fill};" }
            }
            div { class: "post-stats",
                span { class: "post-stat",
                    IconView { icon: Icon::Heart }
                    "{post.likes}"
                }
                span { class: "post-stat",
                    IconView { icon: Icon::Message }
                    "{post.comments}"
                }
            }
        }
    }
}
