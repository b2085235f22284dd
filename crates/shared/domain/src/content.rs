//! The localized content document.
//!
//! Everything the site displays comes from one JSON document with camelCase keys.
//! It is loaded once, wrapped in [`Content`] and never mutated afterwards.

use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Footer label that routes to the contact page even without an explicit target.
pub const LEGACY_CONTACT_LABEL: &str = "Contact Us";

/// Shared read-only handle to a loaded [`ContentDocument`].
///
/// Cloning is a reference count bump. Two handles are equal only when they point
/// to the same loaded document.
#[derive(Debug, Clone)]
pub struct Content {
    inner: Arc<ContentDocument>,
}

impl Content {
    #[must_use]
    pub fn new(document: ContentDocument) -> Self {
        Self { inner: Arc::new(document) }
    }
}

impl From<ContentDocument> for Content {
    fn from(document: ContentDocument) -> Self {
        Self::new(document)
    }
}

impl Deref for Content {
    type Target = ContentDocument;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub nav: Nav,
    pub common: Common,
    pub hero: Hero,
    pub features: Features,
    pub shop: Shop,
    pub about: About,
    pub community: Community,
    pub contact_page: ContactPage,
    pub newsletter: Newsletter,
    pub footer: Footer,
}

/// Navigation labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nav {
    pub home: String,
    pub shop_drops: String,
    pub about_us: String,
    pub community: String,
    pub contact: String,
}

impl Nav {
    #[must_use]
    pub fn label(&self, page: Page) -> &str {
        match page {
            Page::Home => &self.home,
            Page::Shop => &self.shop_drops,
            Page::About => &self.about_us,
            Page::Community => &self.community,
            Page::Contact => &self.contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Common {
    pub brand_name: String,
    pub brand_suffix: String,
    pub currency_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub est: String,
    pub headline_start: String,
    pub headline_highlight: String,
    pub subtext: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: String,
    pub desc: String,
    /// Icon key, e.g. `shield`, `star`, `zap`.
    pub icon_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub section_title: String,
    pub section_subtitle: String,
    pub page_title: String,
    pub view_all_button: String,
    pub add_to_cart: String,
    pub inventory: Vec<InventoryItem>,
}

impl Shop {
    /// The first `limit` inventory items, in document order.
    #[must_use]
    pub fn preview(&self, limit: usize) -> &[InventoryItem] {
        &self.inventory[..self.inventory.len().min(limit)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub title: String,
    pub price: Price,
    /// Category tag shown as a badge on the card.
    #[serde(rename = "type")]
    pub category: String,
    /// Color tag of the card art.
    pub color: String,
}

/// Item or post identifier. Documents use any JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ItemId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Float(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl ItemId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A price as written in the document: a plain amount or a preformatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub initials: String,
    pub section_title: String,
    pub section_text: String,
    pub page: AboutPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub header: String,
    pub mission_statement: String,
    pub story_title: String,
    pub story_body: String,
    pub what_we_do_title: String,
    pub what_we_do_intro: String,
    pub what_we_do_list: Vec<TitledText>,
    pub approach_title: String,
    pub approach_body: String,
    pub looking_ahead_title: String,
    pub looking_ahead_body: String,
    pub why_choose_us_title: String,
    pub why_choose_us_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledText {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub title: String,
    pub subtitle: String,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: ItemId,
    pub author: String,
    /// Display string, e.g. `2h ago`.
    pub timestamp: String,
    pub text: String,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub image_color: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
}

impl Post {
    /// First letter of the author name, upper-cased, for the avatar.
    #[must_use]
    pub fn initial(&self) -> String {
        self.author.chars().find(|c| c.is_alphanumeric()).map_or_else(
            || "?".to_owned(),
            |c| c.to_uppercase().collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub title: String,
    pub subtitle: String,
    pub email_label: String,
    pub email_value: String,
    pub form: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submit: String,
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,
}

fn default_subjects() -> Vec<String> {
    ["General Inquiry", "Order Status", "Valuation Request", "Partnership"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newsletter {
    pub title: String,
    pub text: String,
    pub placeholder: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub brand_column: BrandColumn,
    pub shop_column: LinkColumn,
    pub support_column: LinkColumn,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColumn {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// A footer entry: a bare label, or a label bound to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FooterLink {
    Label(String),
    Page { label: String, page: Page },
}

impl FooterLink {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Label(label) | Self::Page { label, .. } => label,
        }
    }

    /// Page this link navigates to, if any.
    #[must_use]
    pub fn target(&self, nav: &Nav) -> Option<Page> {
        match self {
            Self::Page { page, .. } => Some(*page),
            Self::Label(label) if *label == nav.contact || label == LEGACY_CONTACT_LABEL => {
                Some(Page::Contact)
            },
            Self::Label(_) => None,
        }
    }
}
