use std::time::Duration;

use argyle_content::{ContentSource, parse_document};
use argyle_domain::{Content, Page};
use argyle_ui::{App, HOME_PREVIEW_LIMIT, LOADING_TEXT, render_app_shell, render_document, render_page};
use dioxus::prelude::VirtualDom;

const FIXTURE: &str = include_str!("../../../apps/web/public/en.json");

fn content() -> Content {
    Content::new(parse_document(FIXTURE).expect("fixture parses"))
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Mounts [`App`] and lets its tasks run until the tree stops changing.
async fn settle(source: ContentSource) -> String {
    let mut dom = VirtualDom::new(App).with_root_context(source);
    dom.rebuild_in_place();
    for _ in 0..8 {
        if tokio::time::timeout(Duration::from_millis(250), dom.wait_for_work()).await.is_err() {
            break;
        }
        let _ = dom.render_immediate_to_vec();
    }
    dioxus_ssr::render(&dom)
}

#[test]
fn shop_renders_one_card_per_item() {
    let content = content();
    let html = render_page(&content, Page::Shop);

    assert_eq!(count(&html, "class=\"product-card\""), content.shop.inventory.len());
    assert!(html.contains("1996 Rookie Refractor PSA 9"));
    assert!(html.contains("Mystery Slab Pack"));
}

#[test]
fn shop_prices_carry_the_currency_prefix() {
    let html = render_page(&content(), Page::Shop);

    assert!(html.contains("$1250"));
    assert!(html.contains("$189.99"));
    assert!(html.contains("$Call for price"));
}

#[test]
fn home_previews_at_most_four_items() {
    let content = content();
    let html = render_page(&content, Page::Home);

    let expected = content.shop.inventory.len().min(HOME_PREVIEW_LIMIT);
    assert_eq!(count(&html, "class=\"product-card\""), expected);
    assert!(html.contains(&content.hero.headline_highlight));
    assert!(html.contains(&content.shop.view_all_button));
    assert!(html.contains(&content.about.section_title));
}

#[test]
fn home_shows_every_feature() {
    let content = content();
    let html = render_page(&content, Page::Home);

    assert_eq!(count(&html, "class=\"feature-card\""), content.features.items.len());
}

#[test]
fn community_renders_one_card_per_post() {
    let content = content();
    let html = render_page(&content, Page::Community);

    assert_eq!(count(&html, "class=\"post-card\""), content.community.posts.len());
    assert_eq!(count(&html, "class=\"post-image\""), 2);
    assert!(html.contains("Marcus T."));
    assert!(html.contains("128"));
}

#[test]
fn about_renders_the_full_block() {
    let content = content();
    let html = render_page(&content, Page::About);
    let page = &content.about.page;

    assert!(html.contains(&page.story_title));
    assert_eq!(count(&html, "class=\"offer-card\""), page.what_we_do_list.len());
    assert_eq!(count(&html, "class=\"check-row\""), page.why_choose_us_list.len());
}

#[test]
fn contact_lists_the_default_subjects() {
    let content = content();
    let html = render_page(&content, Page::Contact);

    assert!(html.contains("mailto:hello@argylecollectibles.com"));
    for subject in &content.contact_page.form.subjects {
        assert!(html.contains(subject.as_str()), "missing subject {subject}");
    }
    assert_eq!(count(&html, "<option"), 4);
}

#[test]
fn unknown_page_ids_render_home() {
    let content = content();
    let fallback = render_page(&content, Page::from_id("checkout"));
    let home = render_page(&content, Page::Home);

    assert_eq!(fallback, home);
}

#[test]
fn shell_surrounds_every_page() {
    let content = content();
    for page in Page::all() {
        let html = render_page(&content, page);
        assert!(html.contains("class=\"site-header\""), "{page}: header");
        assert!(html.contains("class=\"site-footer\""), "{page}: footer");
        assert!(html.contains(&content.newsletter.title), "{page}: newsletter");
        assert!(!html.contains(LOADING_TEXT), "{page}: loading view");
    }
}

#[test]
fn active_nav_link_follows_the_page() {
    let content = content();
    let html = render_page(&content, Page::About);

    assert!(html.contains("class=\"nav-link active\""));
    assert_eq!(count(&html, "nav-link active"), 1);
}

#[test]
fn app_shows_loading_until_content_arrives() {
    let html = render_app_shell(ContentSource::inline("{ not json"));

    assert!(html.contains(LOADING_TEXT));
    assert!(html.contains("class=\"spinner\""));
    assert!(!html.contains("class=\"site-header\""));
    assert!(!html.contains("class=\"product-card\""));
}

#[tokio::test]
async fn app_swaps_in_the_site_once_loaded() {
    let html = settle(ContentSource::inline(FIXTURE)).await;

    assert!(html.contains("class=\"site-header\""));
    assert!(html.contains("class=\"site-footer\""));
    assert_eq!(count(&html, "class=\"product-card\""), HOME_PREVIEW_LIMIT);
    assert!(!html.contains(LOADING_TEXT));
}

#[tokio::test]
async fn app_keeps_loading_when_the_document_is_invalid() {
    let html = settle(ContentSource::inline("{ not json")).await;

    assert!(html.contains(LOADING_TEXT));
    assert!(!html.contains("class=\"site-header\""));
}

#[test]
fn header_starts_transparent_with_the_menu_closed() {
    let html = render_page(&content(), Page::Shop);

    assert!(html.contains("class=\"site-header\""));
    assert!(!html.contains("site-header scrolled"));
    assert!(!html.contains("class=\"mobile-nav\""));
}

#[test]
fn document_wraps_the_fragment() {
    let content = content();
    let html = render_document(&content, Page::Shop);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>ARGYLE COLLECTIBLES | Shop Drops</title>"));
    assert!(html.contains("class=\"product-card\""));
}

#[test]
fn document_title_is_escaped() {
    let mut document = parse_document(FIXTURE).expect("fixture parses");
    document.common.brand_name = "Cards & <Co>".into();
    let html = render_document(&Content::new(document), Page::Home);

    assert!(html.contains("Cards &amp; &lt;Co&gt;"));
    assert!(!html.contains("<Co>"));
}
