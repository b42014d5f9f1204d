//! UtilAPI lyrics search

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ProviderErrorMapper, RawApiError};
use crate::types::Envelope;

use super::types::is_ok_status;
use super::{
    DeferredLyrics, LYRICS_SOURCES, LyricsProvider, LyricsResult, SearchResponse, UTILAPI_PROVIDER,
};

impl ProviderErrorMapper for LyricsProvider {
    fn provider_name(&self) -> &'static str {
        UTILAPI_PROVIDER
    }
}

/// Keep the recognized sources, trimmed.
///
/// Fails only when none is recognized; unknown entries next to a known one are
/// dropped with a warning.
pub(crate) fn select_sources(sources: &[String]) -> Result<Vec<String>> {
    let (known, unknown): (Vec<&str>, Vec<&str>) = sources
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .partition(|s| LYRICS_SOURCES.contains(s));

    if known.is_empty() {
        return Err(ProviderError::InvalidSource {
            provider: UTILAPI_PROVIDER.to_string(),
            sources: sources.to_vec(),
            available: LYRICS_SOURCES.iter().map(|s| (*s).to_string()).collect(),
        });
    }
    if !unknown.is_empty() {
        log::warn!("Ignoring unknown lyrics sources: {}", unknown.join(", "));
    }
    Ok(known.into_iter().map(str::to_string).collect())
}

impl LyricsProvider {
    /// 执行 GET 请求
    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.get(&url).query(query);
        HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await
    }

    /// Search lyrics by keyword, optionally restricted to some sources.
    ///
    /// Each result's body is fetched later through [`LyricsResult::body`].
    pub async fn search_lyrics(
        &self,
        query: &str,
        sources: Option<&[String]>,
    ) -> Result<Envelope<Vec<LyricsResult>>> {
        let mut params = vec![("q", query.to_string())];
        if let Some(sources) = sources {
            params.extend(select_sources(sources)?.into_iter().map(|s| ("p", s)));
        }

        let response = self.get("/lyrics", &params).await?;
        let search: SearchResponse = HttpUtils::parse_json(&response.body, self.provider_name())?;
        if !is_ok_status(&search.status) {
            let message = search
                .message
                .unwrap_or_else(|| format!("Search failed (HTTP {})", response.status));
            return Ok(self.map_failure(RawApiError::new(message)));
        }

        let results = search
            .results
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LyricsResult {
                title: entry.title,
                artist: entry.artist,
                provider_name: entry.provider,
                body: DeferredLyrics {
                    client: self.clone(),
                    index: i + 1,
                    query: params.clone(),
                },
            })
            .collect();

        Ok(Envelope::success(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn all_known_sources_kept() {
        assert_eq!(
            select_sources(&strings(&["ln", " genius "])).unwrap(),
            ["ln", "genius"]
        );
    }

    #[test]
    fn unknown_sources_dropped_when_one_is_known() {
        assert_eq!(
            select_sources(&strings(&["azlyrics", "genius"])).unwrap(),
            ["genius"]
        );
    }

    #[test]
    fn no_known_source_is_an_error() {
        let err = select_sources(&strings(&["azlyrics", "GENIUS"])).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::InvalidSource { ref sources, .. } if sources.len() == 2
        ));
        assert!(select_sources(&[]).is_err());
    }
}
