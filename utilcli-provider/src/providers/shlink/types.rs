//! Shlink API 类型定义

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::ShortUrl;

/// RFC 7807 problem detail, Shlink's error body
#[derive(Debug, Default, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ProblemDetail {
    /// `[type] title` on the first line, `detail` on the second.
    pub fn message(&self) -> String {
        format!(
            "[{}] {}\n{}",
            self.error_type.as_deref().unwrap_or("UNKNOWN"),
            self.title.as_deref().unwrap_or("Unknown error"),
            self.detail.as_deref().unwrap_or_default()
        )
    }
}

/// `GET /domains` 响应
#[derive(Debug, Deserialize)]
pub struct DomainsResponse {
    pub domains: DomainList,
}

#[derive(Debug, Deserialize)]
pub struct DomainList {
    pub data: Vec<ShlinkDomain>,
}

#[derive(Debug, Deserialize)]
pub struct ShlinkDomain {
    pub domain: String,
}

/// Shlink Short URL 结构（响应）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShlinkShortUrl {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    #[serde(default, with = "crate::utils::datetime")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Shlink 3.x
    #[serde(default)]
    pub visits_summary: Option<VisitsSummary>,
    /// Shlink 2.x
    #[serde(default)]
    pub visits_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct VisitsSummary {
    pub total: u64,
}

impl From<ShlinkShortUrl> for ShortUrl {
    fn from(raw: ShlinkShortUrl) -> Self {
        Self {
            visits: raw.visits_summary.map(|v| v.total).or(raw.visits_count),
            short_code: raw.short_code,
            short_url: raw.short_url,
            long_url: raw.long_url,
            date_created: raw.date_created,
            domain: raw.domain,
            title: raw.title,
        }
    }
}

/// `GET /short-urls` 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlsResponse {
    pub short_urls: ShortUrlPage,
}

#[derive(Debug, Deserialize)]
pub struct ShortUrlPage {
    pub data: Vec<ShlinkShortUrl>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub pages_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_message_format() {
        let p: ProblemDetail = serde_json::from_str(
            r#"{"type":"INVALID_SHORTCODE","title":"Short URL not found","detail":"No URL found with short code \"abc\"","status":404}"#,
        )
        .unwrap();
        assert_eq!(
            p.message(),
            "[INVALID_SHORTCODE] Short URL not found\nNo URL found with short code \"abc\""
        );
    }

    #[test]
    fn short_url_v3_shape() {
        let raw: ShlinkShortUrl = serde_json::from_str(
            r#"{
                "shortCode": "12C18",
                "shortUrl": "https://s.test/12C18",
                "longUrl": "https://store.steampowered.com",
                "dateCreated": "2016-08-21T20:34:16+02:00",
                "visitsSummary": {"total": 328, "nonBots": 328, "bots": 0},
                "tags": ["games"],
                "domain": null,
                "title": null,
                "crawlable": false
            }"#,
        )
        .unwrap();
        let url = ShortUrl::from(raw);
        assert_eq!(url.short_code, "12C18");
        assert_eq!(url.visits, Some(328));
        assert!(url.date_created.is_some());
        assert!(url.domain.is_none());
    }

    #[test]
    fn short_url_v2_visits_count() {
        let raw: ShlinkShortUrl = serde_json::from_str(
            r#"{"shortCode":"a","shortUrl":"https://s.test/a","longUrl":"https://x.io","visitsCount":7}"#,
        )
        .unwrap();
        assert_eq!(ShortUrl::from(raw).visits, Some(7));
    }

    #[test]
    fn domains_shape() {
        let resp: DomainsResponse = serde_json::from_str(
            r#"{"domains":{"data":[{"domain":"arv.cx","isDefault":true},{"domain":"s.example.com","isDefault":false}]}}"#,
        )
        .unwrap();
        let names: Vec<&str> = resp.domains.data.iter().map(|d| d.domain.as_str()).collect();
        assert_eq!(names, ["arv.cx", "s.example.com"]);
    }
}
