//! UtilAPI 类型定义

use serde::Deserialize;

/// `GET /lyrics` 响应
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SearchEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub provider: String,
}

/// `GET /lyrics/{index}` 的 JSON 响应（纯文本响应不经过此结构）
#[derive(Debug, Deserialize)]
pub struct LyricsBodyResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
}

pub(crate) fn is_ok_status(status: &str) -> bool {
    status.eq_ignore_ascii_case("OK")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_shape() {
        let resp: SearchResponse = serde_json::from_str(
            r#"{"status":"OK","results":[{"title":"Yesterday","artist":"The Beatles","provider":"genius"}]}"#,
        )
        .unwrap();
        assert!(is_ok_status(&resp.status));
        assert_eq!(resp.results[0].artist, "The Beatles");
    }

    #[test]
    fn search_error_shape() {
        let resp: SearchResponse =
            serde_json::from_str(r#"{"status":"ERROR","message":"No result"}"#).unwrap();
        assert!(!is_ok_status(&resp.status));
        assert!(resp.results.is_empty());
    }
}
