use argyle_domain::config::SiteConfig;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment prefix for overrides, e.g. `ARGYLE__CONTENT__SOURCE`.
pub const ENV_PREFIX: &str = "ARGYLE";
/// Config file looked up (any supported extension) when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "argyle";

/// Custom error type for config loading.
#[argyle_derive::argyle_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file with environment overrides.
///
/// 1. **File**: `path` when given (must exist), otherwise `argyle.{toml,json,yaml,...}`
///    in the working directory if present.
/// 2. **Environment**: variables prefixed with `ARGYLE__`, nested with `__`
///    (`ARGYLE__LOG__LEVEL` maps to `log.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly requested file is missing,
/// a source cannot be parsed, or the merged values do not fit `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    debug!(file = %file.display(), required, "Resolving config sources");

    let config = Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    info!("Loaded config from {}", file.display());

    Ok(config)
}

/// [`load_config`] specialised to the launchers' [`SiteConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_site_config(path: Option<impl AsRef<Path>>) -> Result<SiteConfig, ConfigError> {
    load_config(path)
}
