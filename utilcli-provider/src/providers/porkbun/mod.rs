//! Porkbun DNS Provider
//!
//! Manages the records of a single zone through Porkbun's JSON API v3. Every
//! call is a `POST` whose body carries the API key pair.

mod http;
mod provider;
mod types;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::create_http_client;

pub(crate) use types::{CreatedRecord, PingResult, PorkbunRecord, PorkbunStatus, RetrievedRecords};

pub(crate) const PORKBUN_API_BASE: &str = "https://api.porkbun.com/api/json/v3";
pub(crate) const PORKBUN_PROVIDER: &str = "porkbun";

/// Porkbun account and zone settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PorkbunConfig {
    pub api_key: String,
    pub secret_api_key: String,
    /// Zone the records live in, e.g. `"example.com"`.
    pub zone: String,
    /// Record content used when a create request names no IP.
    pub default_ip: String,
    /// Override for the API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Porkbun DNS Provider
pub struct PorkbunProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) secret_api_key: String,
    pub(crate) zone: String,
    pub(crate) default_ip: String,
}

impl PorkbunProvider {
    pub fn new(config: PorkbunConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PORKBUN_PROVIDER)?,
            base_url: config
                .base_url
                .unwrap_or_else(|| PORKBUN_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: config.api_key,
            secret_api_key: config.secret_api_key,
            zone: config.zone,
            default_ip: config.default_ip,
        })
    }

    /// Zone managed by this provider.
    pub fn zone(&self) -> &str {
        &self.zone
    }
}
