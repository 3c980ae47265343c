use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_HOURS: usize = 24;
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Optional overrides for the provider base URLs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub forecast_url: Option<String>,
    pub geocoding_url: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Country code used when `show` is called without `--country`, e.g. "CO".
    pub default_country: Option<String>,

    /// Number of hourly entries to show.
    pub hours: Option<usize>,

    /// Example TOML:
    /// [endpoints]
    /// forecast_url = "http://localhost:8080/v1/forecast"
    pub endpoints: Option<Endpoints>,
}

impl Config {
    pub fn hours(&self) -> usize {
        self.hours.unwrap_or(DEFAULT_HOURS)
    }

    pub fn default_country(&self) -> Option<&str> {
        self.default_country.as_deref()
    }

    /// Store the default country upper-cased; an empty value clears it.
    pub fn set_default_country(&mut self, country: &str) {
        let trimmed = country.trim();
        self.default_country =
            if trimmed.is_empty() { None } else { Some(trimmed.to_uppercase()) };
    }

    pub fn set_hours(&mut self, hours: usize) {
        self.hours = Some(hours);
    }

    pub fn forecast_url(&self) -> &str {
        self.endpoints
            .as_ref()
            .and_then(|e| e.forecast_url.as_deref())
            .unwrap_or(DEFAULT_FORECAST_URL)
    }

    pub fn geocoding_url(&self) -> &str {
        self.endpoints
            .as_ref()
            .and_then(|e| e.geocoding_url.as_deref())
            .unwrap_or(DEFAULT_GEOCODING_URL)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "clima", "clima-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
