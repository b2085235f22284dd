//! # Argyle UI
//!
//! The showcase site as a Dioxus component tree. [`App`] loads the content document
//! from the [`argyle_content::ContentSource`] found in context and then renders
//! [`Site`]: header, the page selected by a single [`Navigation`] signal, newsletter
//! and footer. Every launcher (web, desktop, SSR) mounts the same tree.

mod app;
pub mod components;
mod context;
pub mod icons;
mod navigation;
pub mod pages;
pub mod render;
pub mod theme;

pub use app::{App, PageView, Site, SiteProps};
pub use components::{HOME_PREVIEW_LIMIT, LOADING_TEXT};
pub use context::use_content;
pub use navigation::Navigation;
pub use render::{render_app_shell, render_document, render_page};
