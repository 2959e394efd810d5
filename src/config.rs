//! Configuration management for Convertist
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Configuration only supplies startup defaults; nothing is written back.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_AMOUNT, DEFAULT_BASE_CURRENCY, DEFAULT_HISTORY_URL, DEFAULT_HOME_ZONE,
    DEFAULT_RATES_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TARGET_CURRENCY, DEFAULT_TARGET_ZONE,
    MAX_REQUEST_TIMEOUT_SECS,
};
use crate::currency::{find_currency, TimeRange};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub timezone: TimezoneConfig,
    pub currency: CurrencyConfig,
    pub logging: LoggingConfig,
}

/// Tab shown on startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    #[default]
    Timezone,
    Currency,
    Shoe,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Tab to open on startup
    /// Options: "timezone", "currency", "shoe"
    pub default_tab: StartTab,
}

/// Timezone tab configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimezoneConfig {
    /// IANA identifier of the home city
    pub home_zone: String,
    /// Target cities shown on startup, in order
    pub target_zones: Vec<String>,
}

/// Currency tab configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub base: String,
    pub target: String,
    /// Initial amount, as typed
    pub amount: String,
    /// Trend chart range: "1D", "5D" or "6M"
    pub default_range: TimeRange,
    /// Latest-rates endpoint; the base code is appended as a path segment
    pub rates_url: String,
    /// Historical-rates endpoint
    pub history_url: String,
    /// HTTP timeout in seconds
    pub request_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            home_zone: DEFAULT_HOME_ZONE.to_string(),
            target_zones: vec![DEFAULT_TARGET_ZONE.to_string()],
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_CURRENCY.to_string(),
            target: DEFAULT_TARGET_CURRENCY.to_string(),
            amount: DEFAULT_AMOUNT.to_string(),
            default_range: TimeRange::default(),
            rates_url: DEFAULT_RATES_URL.to_string(),
            history_url: DEFAULT_HISTORY_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl CurrencyConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("convertist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("convertist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.validate_timezone()?;
        self.validate_currency()?;

        self.logging.level_filter()?;

        Ok(())
    }

    fn validate_timezone(&self) -> Result<()> {
        if self.timezone.home_zone.parse::<chrono_tz::Tz>().is_err() {
            anyhow::bail!("Unknown home_zone '{}'", self.timezone.home_zone);
        }

        for zone in &self.timezone.target_zones {
            if zone.parse::<chrono_tz::Tz>().is_err() {
                anyhow::bail!("Unknown time zone '{}' in target_zones", zone);
            }
        }

        Ok(())
    }

    fn validate_currency(&self) -> Result<()> {
        let currency = &self.currency;

        for (field, code) in [("base", &currency.base), ("target", &currency.target)] {
            if find_currency(code).is_none() {
                anyhow::bail!("Unsupported {} currency '{}'", field, code);
            }
        }

        if currency.request_timeout_secs == 0 || currency.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            anyhow::bail!(
                "request_timeout_secs must be between 1 and {} seconds, got {}",
                MAX_REQUEST_TIMEOUT_SECS,
                currency.request_timeout_secs
            );
        }

        if currency.rates_url.trim().is_empty() {
            anyhow::bail!("rates_url cannot be empty");
        }
        if currency.history_url.trim().is_empty() {
            anyhow::bail!("history_url cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Convertist Configuration File\n# Generated on {}\n\n",
            datetime::format_today()
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("convertist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
