//! UtilAPI lyrics Provider
//!
//! A self-hosted lyrics aggregator. A search returns titles only; the body of
//! each result is fetched on demand through [`DeferredLyrics`].

mod lyrics;
mod provider;
mod types;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::create_http_client;

pub use lyrics::{DeferredLyrics, LyricsResult};
pub(crate) use types::{LyricsBodyResponse, SearchResponse};

pub(crate) const UTILAPI_PROVIDER: &str = "utilapi";
/// Lyrics sources the service understands.
pub const LYRICS_SOURCES: [&str; 2] = ["ln", "genius"];

/// UtilAPI location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsConfig {
    /// Scheme and host, e.g. `"http://localhost"`.
    pub host: String,
    pub port: u16,
}

/// UtilAPI lyrics Provider
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LyricsProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl LyricsProvider {
    pub fn new(config: LyricsConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(UTILAPI_PROVIDER)?,
            base_url: format!("{}:{}/api", config.host.trim_end_matches('/'), config.port),
        })
    }
}
