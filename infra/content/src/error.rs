use std::borrow::Cow;

/// Everything that can keep the content document from loading.
#[argyle_derive::argyle_error]
pub enum ContentError {
    /// Transport failure or a non-success HTTP status.
    #[error("Content request failed{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The document file could not be read.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Content file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The payload is not a well-formed content document.
    #[error("Content document is malformed{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The document location cannot be turned into an absolute URL.
    #[error("Invalid content URL{}: {message}", format_context(.context))]
    InvalidUrl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The document parsed but breaks an invariant (e.g. duplicate ids).
    #[error("Content document rejected{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
