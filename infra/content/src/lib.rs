//! # Content
//!
//! Loading of the single localized content document the site renders from.
//!
//! A [`ContentSource`] says where the document lives (HTTP, a file, or inline JSON).
//! [`ContentSource::load`] fetches it once, parses it, checks the id invariants and
//! hands back a shared, read-only [`Content`] handle.
//!
//! ```rust,ignore
//! let content = ContentSource::http("./en.json").load().await?;
//! println!("{} items", content.shop.inventory.len());
//! ```

mod error;
mod source;
mod summary;
mod validate;

pub use crate::error::{ContentError, ContentErrorExt};
pub use crate::source::{ContentSource, parse_document, resolve_url};
pub use crate::summary::ContentSummary;
pub use crate::validate::validate;
pub use argyle_domain::Content;
