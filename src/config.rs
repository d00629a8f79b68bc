use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::state::prefs::{LayoutMode, ThemeChoice};

/// Prefix shared by every gallery environment variable
const ENV_PREFIX: &str = "GALLERY_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gallery configuration: {0}")]
    Env(#[from] envy::Error),
}

/// Application settings, read from `GALLERY_*` environment variables.
///
/// Every field has a default so the gallery starts with no environment at all.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default)]
    pub theme: ThemeChoice,
    /// Longest edge, in pixels, of decoded pictures
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_thumbnail_size() -> u32 {
    256
}

fn default_fetch_timeout_secs() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            theme: ThemeChoice::default(),
            thumbnail_size: default_thumbnail_size(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Config>(vars)?)
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::from_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default configuration");
        Config::default()
    })
});
