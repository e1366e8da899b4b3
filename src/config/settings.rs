use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::cities;

fn default_city() -> String {
    cities::DEFAULT_CITY.to_string()
}
fn default_country() -> String {
    "Indonesia".to_string()
}
fn default_auth_base_url() -> String {
    "https://auth.waktusholat.com".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerConfig {
    /// Selected city; must be one of the bundled city list.
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            country: default_country(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the GoTrue-compatible identity provider.
    #[serde(default = "default_auth_base_url")]
    pub base_url: String,
    /// Public API key sent as the `apikey` header; empty = omitted.
    #[serde(default)]
    pub anon_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: default_auth_base_url(),
            anon_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub prayer: PrayerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "waktusholat")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn state_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("state.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.prayer.city, "Jakarta");
        assert_eq!(config.prayer.country, "Indonesia");
        assert!(config.auth.anon_key.is_empty());
    }

    #[test]
    fn partial_config_keeps_missing_defaults() {
        let config: AppConfig = toml::from_str("[prayer]\ncity = \"Surabaya\"\n").unwrap();
        assert_eq!(config.prayer.city, "Surabaya");
        assert_eq!(config.prayer.country, "Indonesia");
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.prayer.city = "Medan".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.prayer.city, "Medan");
    }
}
