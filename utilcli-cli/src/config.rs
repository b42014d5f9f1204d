//! Config file loading
//!
//! One JSON file with an optional section per service:
//!
//! ```json
//! {
//!   "porkbun": {"API_KEY": "pk1_..", "SECRET_KEY": "sk1_..", "DOMAIN": "example.com", "SERVER_IP": "203.0.113.7"},
//!   "shlink":  {"DOMAIN": "arv.cx", "API_KEY": "..", "ALT_DOMAIN": "go.example.org"},
//!   "utilapi": {"HOST": "http://localhost", "PORT": 8000}
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use utilcli_provider::{LyricsConfig, PorkbunConfig, ShlinkConfig};

const APP_DIR: &str = "utilcli";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config directory on this platform; pass --config")]
    NoConfigDir,

    #[error("Config file doesn't exist yet: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config has no \"{0}\" section")]
    MissingSection(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PorkbunSection {
    pub api_key: String,
    pub secret_key: String,
    pub domain: String,
    pub server_ip: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ShlinkSection {
    pub domain: String,
    pub api_key: String,
    /// Short domain used when `create-shorturl` names none
    #[serde(default)]
    pub alt_domain: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UtilapiSection {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub porkbun: Option<PorkbunSection>,
    #[serde(default)]
    pub shlink: Option<ShlinkSection>,
    #[serde(default)]
    pub utilapi: Option<UtilapiSection>,
}

impl AppConfig {
    /// `<config dir>/utilcli/config.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "Loaded config from {} (porkbun: {}, shlink: {}, utilapi: {})",
            path.display(),
            config.porkbun.is_some(),
            config.shlink.is_some(),
            config.utilapi.is_some()
        );
        Ok(config)
    }

    pub fn porkbun(&self) -> Result<&PorkbunSection, ConfigError> {
        self.porkbun
            .as_ref()
            .ok_or(ConfigError::MissingSection("porkbun"))
    }

    pub fn shlink(&self) -> Result<&ShlinkSection, ConfigError> {
        self.shlink
            .as_ref()
            .ok_or(ConfigError::MissingSection("shlink"))
    }

    pub fn utilapi(&self) -> Result<&UtilapiSection, ConfigError> {
        self.utilapi
            .as_ref()
            .ok_or(ConfigError::MissingSection("utilapi"))
    }
}

impl From<&PorkbunSection> for PorkbunConfig {
    fn from(section: &PorkbunSection) -> Self {
        Self {
            api_key: section.api_key.clone(),
            secret_api_key: section.secret_key.clone(),
            zone: section.domain.clone(),
            default_ip: section.server_ip.clone(),
            base_url: section.base_url.clone(),
        }
    }
}

impl From<&ShlinkSection> for ShlinkConfig {
    fn from(section: &ShlinkSection) -> Self {
        Self {
            domain: section.domain.clone(),
            api_key: section.api_key.clone(),
            base_url: section.base_url.clone(),
        }
    }
}

impl From<&UtilapiSection> for LyricsConfig {
    fn from(section: &UtilapiSection) -> Self {
        Self {
            host: section.host.clone(),
            port: section.port,
        }
    }
}
