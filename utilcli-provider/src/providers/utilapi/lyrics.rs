//! Search results and their on-demand bodies.

use serde::Serialize;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ProviderErrorMapper, RawApiError};
use crate::types::Envelope;

use super::types::is_ok_status;
use super::{LyricsBodyResponse, LyricsProvider};

/// One search hit. The lyrics text is not part of it; call
/// [`DeferredLyrics::fetch`] on [`body`](Self::body).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsResult {
    pub title: String,
    pub artist: String,
    pub provider_name: String,
    #[serde(skip)]
    pub body: DeferredLyrics,
}

/// Handle for fetching one result's lyrics later.
///
/// Holds the 1-based result index, the query that produced it and a clone of
/// the client to call.
#[derive(Debug, Clone)]
pub struct DeferredLyrics {
    pub(crate) client: LyricsProvider,
    pub(crate) index: usize,
    pub(crate) query: Vec<(&'static str, String)>,
}

impl DeferredLyrics {
    /// 1-based position of the result in the search response.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fetch the lyrics text.
    ///
    /// A plain-text answer is the lyrics. A JSON answer is read for `lyrics`, or
    /// for the `message` of a refusal.
    pub async fn fetch(&self) -> Result<Envelope<String>> {
        let provider = &self.client;
        let mut query = self.query.clone();
        query.push(("lyricsonly", "1".to_string()));

        let response = provider
            .get(&format!("/lyrics/{}", self.index), &query)
            .await?;

        if !response.is_json() {
            return Ok(if (200..300).contains(&response.status) {
                Envelope::success(response.body)
            } else {
                provider.map_failure(RawApiError::new(format!("HTTP {}", response.status)))
            });
        }

        let body: LyricsBodyResponse =
            HttpUtils::parse_json(&response.body, provider.provider_name())?;
        let refused = body.status.as_deref().is_some_and(|s| !is_ok_status(s));
        Ok(match body.lyrics {
            Some(lyrics) if !refused => Envelope::success(lyrics),
            _ => provider.map_failure(RawApiError::new(
                body.message
                    .unwrap_or_else(|| "Lyrics not available".to_string()),
            )),
        })
    }
}
