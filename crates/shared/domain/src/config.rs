use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Relative path of the content document next to the site entry point.
pub const DEFAULT_CONTENT_PATH: &str = "./en.json";

/// Settings shared by the native launchers.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub content: ContentConfig,
    pub window: WindowConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the content document lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// URL (`http://`, `https://`) or path of the document.
    pub source: String,
    /// Base URL for resolving a relative `source` over HTTP outside the browser.
    pub base_url: Option<String>,
}

/// Desktop window settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging knobs for native binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// Extra env-filter directives, e.g. `argyle_ui=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files. Console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for ContentConfig {
    fn default() -> Self {
        Self { source: DEFAULT_CONTENT_PATH.to_owned(), base_url: None }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Argyle Collectibles".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, path: None, json: false, max_files: 10 }
    }
}
