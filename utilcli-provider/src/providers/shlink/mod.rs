//! Shlink URL shortener Provider
//!
//! Talks to a self-hosted Shlink instance through its REST API v2, authenticated
//! with a static `X-Api-Key` header.

mod http;
mod provider;
mod types;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::create_http_client;

pub(crate) use types::{DomainsResponse, ProblemDetail, ShlinkShortUrl, ShortUrlsResponse};

pub(crate) const SHLINK_PROVIDER: &str = "shlink";

/// Shlink instance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShlinkConfig {
    /// Default short domain; also where the API lives unless `base_url` is set.
    pub domain: String,
    pub api_key: String,
    /// Override for the REST base URL (defaults to `https://{domain}/rest/v2`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Shlink URL shortener Provider
pub struct ShlinkProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) domain: String,
    pub(crate) api_key: String,
}

impl ShlinkProvider {
    pub fn new(config: ShlinkConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| format!("https://{}/rest/v2", config.domain));
        Ok(Self {
            client: create_http_client(SHLINK_PROVIDER)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            domain: config.domain,
            api_key: config.api_key,
        })
    }

    /// Default short domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}
