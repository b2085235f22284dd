use crate::error::{ContentError, ContentErrorExt};
use crate::summary::ContentSummary;
use crate::validate::validate;
use argyle_domain::Content;
use argyle_domain::ContentDocument;
#[cfg(not(target_arch = "wasm32"))]
use argyle_domain::config::ContentConfig;
use reqwest::Url;
use std::borrow::Cow;
use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use tracing::{debug, info};

/// Where the content document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// HTTP GET. Relative URLs resolve against the page location in the browser.
    Http { url: String },
    /// A file on disk.
    #[cfg(not(target_arch = "wasm32"))]
    File { path: PathBuf },
    /// JSON compiled into the binary or handed over by a test.
    Inline(String),
}

impl ContentSource {
    pub fn http(url: impl Into<String>) -> Self {
        Self::Http { url: url.into() }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    pub fn inline(json: impl Into<String>) -> Self {
        Self::Inline(json.into())
    }

    /// Picks the source for a native launcher.
    ///
    /// Absolute `http(s)` URLs are fetched as-is; a relative location goes over HTTP
    /// when a `base_url` is configured and is read from disk otherwise.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn from_config(config: &ContentConfig) -> Self {
        let location = config.source.as_str();
        if is_absolute_http(location) {
            return Self::http(location);
        }
        match &config.base_url {
            Some(base) => match resolve_url(Some(base), location) {
                Ok(url) => Self::http(url.to_string()),
                Err(_) => Self::http(location),
            },
            None => Self::file(location),
        }
    }

    /// Fetches, parses and validates the document.
    ///
    /// # Errors
    /// Any [`ContentError`]: transport, I/O, malformed JSON or a broken invariant.
    pub async fn load(&self) -> Result<Content, ContentError> {
        debug!(source = %self, "Loading content document");

        let raw = self.fetch().await?;
        let document = parse_document(&raw)?;
        validate(&document)?;

        info!(source = %self, summary = %ContentSummary::of(&document), "Content document loaded");
        Ok(Content::new(document))
    }

    async fn fetch(&self) -> Result<Cow<'_, str>, ContentError> {
        match self {
            Self::Http { url } => fetch_http(url).await.map(Cow::Owned),
            #[cfg(not(target_arch = "wasm32"))]
            Self::File { path } => tokio::fs::read_to_string(path)
                .await
                .context(format!("Reading {}", path.display()))
                .map(Cow::Owned),
            Self::Inline(raw) => Ok(Cow::Borrowed(raw)),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url } => write!(f, "http:{url}"),
            #[cfg(not(target_arch = "wasm32"))]
            Self::File { path } => write!(f, "file:{}", path.display()),
            Self::Inline(raw) => write!(f, "inline:{} bytes", raw.len()),
        }
    }
}

/// Deserializes a content document from JSON text.
///
/// # Errors
/// [`ContentError::Parse`] when the text is not a content document.
pub fn parse_document(raw: &str) -> Result<ContentDocument, ContentError> {
    serde_json::from_str(raw).context("Parsing the content document")
}

/// Turns `target` into an absolute URL, joining it onto `base` when relative.
///
/// # Errors
/// [`ContentError::InvalidUrl`] when `target` is relative and there is no usable base.
pub fn resolve_url(base: Option<&str>, target: &str) -> Result<Url, ContentError> {
    if let Ok(url) = Url::parse(target) {
        return Ok(url);
    }

    let Some(base) = base else {
        return Err(ContentError::InvalidUrl {
            message: format!("'{target}' is relative and no base URL is known").into(),
            context: None,
        });
    };

    Url::parse(base).and_then(|base| base.join(target)).map_err(|e| ContentError::InvalidUrl {
        message: format!("cannot resolve '{target}' against '{base}': {e}").into(),
        context: None,
    })
}

fn is_absolute_http(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

async fn fetch_http(url: &str) -> Result<String, ContentError> {
    let url = resolve_url(page_location().as_deref(), url)?;

    let response = reqwest::get(url.clone())
        .await
        .context(format!("GET {url}"))?
        .error_for_status()
        .context(format!("GET {url}"))?;

    response.text().await.context("Reading the response body")
}

/// The browser's current location, the base for same-origin relative fetches.
#[cfg(target_arch = "wasm32")]
fn page_location() -> Option<String> {
    web_sys::window().and_then(|window| window.location().href().ok())
}

#[cfg(not(target_arch = "wasm32"))]
const fn page_location() -> Option<String> {
    None
}
