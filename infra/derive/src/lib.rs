#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the Argyle workspace.
//!
//! Right now this is a single attribute, [`macro@argyle_error`], which turns a plain enum
//! into the error type every library crate exposes.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # What it adds
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`, and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// * Only enums are accepted, and only variants with named fields.
/// * A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[argyle_derive::argyle_error]
/// pub enum ContentError {
///     #[error("Content file error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal content error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, ContentError> {
///     std::fs::read_to_string(path).context("Reading the content document")
/// }
/// ```
#[proc_macro_attribute]
pub fn argyle_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
