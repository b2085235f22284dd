//! # Domain Models
//!
//! Pure data for the showcase site: the localized content document, the page
//! identifiers the router switches on, and the configuration shapes the launchers read.
//! Keep it lean: no I/O, networking, or rendering here.

pub mod config;
pub mod content;
pub mod page;

pub use content::{Content, ContentDocument};
pub use page::Page;
