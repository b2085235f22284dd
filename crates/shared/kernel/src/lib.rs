//! Kernel utilities shared by the native launchers (desktop, CLI).
//! Keep this crate lightweight: configuration loading plus the domain re-export.
//!
//! ## Config loading
//! ```rust,no_run
//! use argyle_kernel::config::load_site_config;
//!
//! let cfg = load_site_config(None::<&str>).unwrap_or_default();
//! println!("content from {}", cfg.content.source);
//! ```

pub mod config;

pub use argyle_domain as domain;
