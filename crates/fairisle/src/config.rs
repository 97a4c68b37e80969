//! # Service Configuration
//!
//! Loaded once at startup from TOML:
//!
//! ```toml
//! [metadata]
//! name_prefix = "Fair Isle"
//! base_url = "https://onchain-fair-isle.vercel.app"
//! image = "data-uri"   # or "url"
//!
//! [batch]
//! workers = 4
//! output_dir = "out"
//! write_metadata = true
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface early.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FairIsleError, FairIsleResult};

/// Default public site used for `external_url` and preview links.
pub const DEFAULT_BASE_URL: &str = "https://onchain-fair-isle.vercel.app";

/// Default collection description.
pub const DEFAULT_DESCRIPTION: &str =
    "A generative fair isle knitting pattern, deterministically created on-chain.";

/// How the `image` field of token metadata is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageMode {
    /// Inline `data:image/svg+xml;base64,...` document.
    #[default]
    DataUri,
    /// Link to `{base_url}/api/preview?seed={id}`.
    Url,
}

/// Token metadata settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    /// Prefix of the token name, followed by ` #<id>`.
    pub name_prefix: String,
    /// Collection description.
    pub description: String,
    /// Public site root without trailing slash.
    pub base_url: String,
    /// Image representation.
    pub image: ImageMode,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            name_prefix: "Fair Isle".to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            image: ImageMode::DataUri,
        }
    }
}

impl MetadataConfig {
    /// Site root with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Batch rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Worker threads. Zero means one per available core.
    pub workers: usize,
    /// Directory receiving `<seed>.svg` and `<seed>.json`.
    pub output_dir: PathBuf,
    /// Whether to write metadata next to each SVG.
    pub write_metadata: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            output_dir: PathBuf::from("out"),
            write_metadata: true,
        }
    }
}

impl BatchConfig {
    /// Resolved worker count, never zero.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FairIsleConfig {
    /// Token metadata settings.
    pub metadata: MetadataConfig,
    /// Batch rendering settings.
    pub batch: BatchConfig,
}

impl FairIsleConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`FairIsleError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> FairIsleResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FairIsleError::Io`] if the file exists but cannot be read,
    /// or [`FairIsleError::Config`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> FairIsleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| FairIsleError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
