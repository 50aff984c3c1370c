//! # Client configuration: `blog.toml`
//!
//! Defines the TOML configuration file read by the client at start-up
//! (filename: [`BlogConfig::filename`] = `"blog.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://blog-render-back.onrender.com"
//! timeout_secs = 30        # omit for no timeout
//!
//! [session]
//! remember = false         # restore the last session on start-up
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`BlogConfig`] | Top-level config. Builder helpers (`new`, `with_timeout`, `with_remember`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiSection`] | Remote API origin and optional request timeout. |
//! | [`SessionSection`] | Whether a persisted session is restored. Defaults to `false`, so a cold start is logged out. |
//!
//! All structs derive `Default`, so a missing or empty config file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Origin used when neither the config file nor the environment names one.
pub const DEFAULT_BASE_URL: &str = "https://blog-render-back.onrender.com";

/// Top-level configuration stored in `blog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub session: SessionSection,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSection {
    #[serde(default)]
    pub remember: bool,
}

impl BlogConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSection {
                base_url: base_url.into(),
                timeout_secs: None,
            },
            session: SessionSection::default(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.api.timeout_secs = Some(secs);
        self
    }

    /// Builder method to enable session restore.
    pub fn with_remember(mut self, remember: bool) -> Self {
        self.session.remember = remember;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "blog.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `blog.toml` from `dir`, falling back to defaults when it is missing.
    pub fn load_from(dir: &std::path::Path) -> Result<Self, toml::de::Error> {
        match std::fs::read_to_string(dir.join(Self::filename())) {
            Ok(content) => Self::from_toml(&content),
            Err(e) => {
                tracing::debug!("no {} in {}: {}", Self::filename(), dir.display(), e);
                Ok(Self::default())
            }
        }
    }
}
