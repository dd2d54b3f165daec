//! Configuration management for EasyLife

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::DEFAULT_IMAGE_URL;
use crate::error::{ConfigError, Result};

/// Upper bound for the page transition delay
const MAX_TRANSITION_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub marketplace: MarketplaceConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceConfig {
    /// Code a seller must enter to register
    pub seller_passcode: String,
    /// Image for products created without one
    pub default_image_url: String,
    /// Start with the demo products
    pub seed_catalog: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub transition_ms: u64,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            seller_passcode: "EasyLife".to_string(),
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            seed_catalog: true,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { transition_ms: 300 }
    }
}

impl NavigationConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file at the default location yields the built-in defaults;
    /// a path named through `EASYLIFE_CONFIG` must exist.
    pub fn load() -> Result<Self> {
        if let Some(path) = env_config_path() {
            return Self::load_from_path(&path);
        }

        let path = resolve_config_path()?;
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.marketplace.seller_passcode.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "marketplace.seller_passcode".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.navigation.transition_ms > MAX_TRANSITION_MS {
            return Err(ConfigError::InvalidValue {
                field: "navigation.transition_ms".to_string(),
                reason: format!("must be at most {}", MAX_TRANSITION_MS),
            }
            .into());
        }
        Ok(())
    }
}

fn env_config_path() -> Option<PathBuf> {
    std::env::var("EASYLIFE_CONFIG")
        .ok()
        .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()))
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Some(path) = env_config_path() {
        return Ok(path);
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("easylife").join("config.toml"))
}
