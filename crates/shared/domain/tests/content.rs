use argyle_domain::content::{FooterLink, InventoryItem, LEGACY_CONTACT_LABEL, Price};
use argyle_domain::{Content, ContentDocument, Page};
use serde_json::json;

const SITE_CONTENT: &str = include_str!("../../../../apps/web/public/en.json");

fn document() -> ContentDocument {
    serde_json::from_str(SITE_CONTENT).expect("shipped content document should parse")
}

#[test]
fn shipped_document_parses() {
    let doc = document();
    assert_eq!(doc.shop.inventory.len(), 8);
    assert_eq!(doc.community.posts.len(), 4);
    assert_eq!(doc.features.items.len(), 3);
    assert_eq!(doc.contact_page.form.subjects.len(), 4, "subjects default when omitted");
}

#[test]
fn item_ids_accept_numbers_and_strings() {
    let doc = document();
    assert_eq!(doc.shop.inventory[0].id.as_str(), "1");
    assert_eq!(doc.shop.inventory[0].id.to_string(), "1");
    assert_eq!(doc.community.posts[0].id.as_str(), "p-101");
}

#[test]
fn negative_and_fractional_ids_are_stringified() {
    let items: Vec<InventoryItem> = serde_json::from_value(json!([
        { "id": -1, "title": "Promo", "price": 5, "type": "Break", "color": "blue" },
        { "id": 1.5, "title": "Half", "price": 5, "type": "Break", "color": "gold" },
        { "id": 18446744073709551615_u64, "title": "Max", "price": 5, "type": "Break", "color": "gold" }
    ]))
    .expect("any JSON number is a valid id");

    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["-1", "1.5", "18446744073709551615"]);
}

#[test]
fn prices_render_like_the_document() {
    let doc = document();
    let rendered: Vec<String> = doc.shop.inventory.iter().map(|i| i.price.to_string()).collect();
    assert_eq!(rendered[0], "1250");
    assert_eq!(rendered[1], "189.99");
    assert_eq!(rendered[5], "299.5");
    assert!(matches!(doc.shop.inventory[6].price, Price::Label(_)));
}

#[test]
fn category_is_read_from_type_key() {
    let doc = document();
    assert_eq!(doc.shop.inventory[0].category, "Graded");
}

#[test]
fn preview_is_capped_by_inventory_length() {
    let doc = document();
    assert_eq!(doc.shop.preview(4).len(), 4);
    assert_eq!(doc.shop.preview(100).len(), doc.shop.inventory.len());
    assert!(doc.shop.preview(0).is_empty());
}

#[test]
fn footer_links_resolve_targets() {
    let doc = document();
    let targets: Vec<Option<Page>> =
        doc.footer.support_column.links.iter().map(|l| l.target(&doc.nav)).collect();
    assert_eq!(targets, vec![None, None, Some(Page::Community), Some(Page::Contact)]);

    let by_nav_label = FooterLink::Label(doc.nav.contact.clone());
    assert_eq!(by_nav_label.target(&doc.nav), Some(Page::Contact));

    let legacy = FooterLink::Label(LEGACY_CONTACT_LABEL.to_owned());
    assert_eq!(legacy.label(), "Contact Us");
}

#[test]
fn post_defaults_apply() {
    let raw = json!({ "id": 9, "author": "  eve", "timestamp": "now", "text": "hi" });
    let post: argyle_domain::content::Post = serde_json::from_value(raw).expect("post");
    assert!(!post.has_image);
    assert!(post.image_color.is_none());
    assert_eq!((post.likes, post.comments), (0, 0));
    assert_eq!(post.initial(), "E");
}

#[test]
fn content_handles_share_one_document() {
    let content = Content::new(document());
    let clone = content.clone();
    assert_eq!(content, clone);
    assert_ne!(content, Content::new(document()));
    assert_eq!(clone.common.currency_prefix, "$");
}

#[test]
fn nav_labels_cover_every_page() {
    let doc = document();
    for page in Page::all() {
        assert!(!doc.nav.label(page).is_empty(), "missing nav label for {page}");
    }
}
