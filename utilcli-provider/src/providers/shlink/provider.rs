//! Shlink short URL operations

use reqwest::Method;
use serde_json::json;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::validate_http_url;
use crate::traits::ProviderErrorMapper;
use crate::types::{Envelope, ShortUrl, ShortUrlIdentifier, ShortenRequest};

use super::{DomainsResponse, SHLINK_PROVIDER, ShlinkProvider, ShlinkShortUrl, ShortUrlsResponse};

impl ProviderErrorMapper for ShlinkProvider {
    fn provider_name(&self) -> &'static str {
        SHLINK_PROVIDER
    }
}

impl ShlinkProvider {
    /// Domains registered on the account.
    pub async fn get_available_domains(&self) -> Result<Envelope<Vec<String>>> {
        let response = self.request(Method::GET, "/domains", &[], None).await?;
        if response.status != 200 {
            return Ok(self.map_failure(self.problem(&response)));
        }

        let domains: DomainsResponse = HttpUtils::parse_json(&response.body, self.provider_name())?;
        let names = domains.domains.data.into_iter().map(|d| d.domain).collect();
        Ok(Envelope::success(names).with_status_code(response.status))
    }

    /// Resolve a user-supplied identifier against the account's domains.
    ///
    /// The outer `Err` is a request failure; the inner one a failed domain listing.
    async fn resolve_identifier(
        &self,
        identifier: &str,
    ) -> Result<std::result::Result<ShortUrlIdentifier, Envelope<()>>> {
        let domains = self.get_available_domains().await?;
        if !domains.is_ok() {
            return Ok(Err(domains.forward_failure()));
        }
        let known = domains.into_data().unwrap_or_default();
        let resolved = ShortUrlIdentifier::resolve(identifier, &known);
        log::debug!(
            "Resolved '{identifier}' to code '{}' on {}",
            resolved.short_code,
            resolved.domain.as_deref().unwrap_or("default domain")
        );
        Ok(Ok(resolved))
    }

    fn short_url_path(identifier: &ShortUrlIdentifier) -> String {
        format!("/short-urls/{}", urlencoding::encode(&identifier.short_code))
    }

    fn domain_query(identifier: &ShortUrlIdentifier) -> Vec<(&'static str, String)> {
        identifier
            .domain
            .iter()
            .map(|d| ("domain", d.clone()))
            .collect()
    }

    /// Create a short URL.
    ///
    /// `alt_domain` must be one of the account's domains; the envelope of a failed
    /// domain listing is returned unchanged.
    pub async fn shorten(&self, req: &ShortenRequest) -> Result<Envelope<ShortUrl>> {
        validate_http_url(&req.url, self.provider_name())?;

        let mut domain = self.domain.clone();
        if let Some(alt_domain) = req.alt_domain.as_deref() {
            let domains = self.get_available_domains().await?;
            if !domains.is_ok() {
                return Ok(domains.forward_failure());
            }
            let available = domains.into_data().unwrap_or_default();
            if !available.iter().any(|d| d == alt_domain) {
                return Err(ProviderError::UnknownDomain {
                    provider: self.provider_name().to_string(),
                    domain: alt_domain.to_string(),
                    available,
                });
            }
            domain = alt_domain.to_string();
        }

        let mut body = json!({
            "longUrl": req.url,
            "findIfExists": false,
            "domain": domain,
            "validateUrl": true,
            "crawlable": false,
        });
        if let Some(slug) = req.slug.as_deref().filter(|s| !s.is_empty()) {
            body["customSlug"] = json!(slug);
        }

        let response = self
            .request(Method::POST, "/short-urls", &[], Some(&body))
            .await?;
        if response.status != 200 {
            return Ok(self.map_failure(self.problem(&response)));
        }

        let created: ShlinkShortUrl = HttpUtils::parse_json(&response.body, self.provider_name())?;
        log::info!("Shortened {} to {}", created.long_url, created.short_url);
        Ok(Envelope::success(ShortUrl::from(created)).with_status_code(response.status))
    }

    /// Point an existing short URL at `new_url`.
    pub async fn edit_short_url(&self, identifier: &str, new_url: &str) -> Result<Envelope<()>> {
        validate_http_url(new_url, self.provider_name())?;

        let identifier = match self.resolve_identifier(identifier).await? {
            Ok(identifier) => identifier,
            Err(failed) => return Ok(failed),
        };

        let body = json!({
            "longUrl": new_url,
            "validateUrl": true,
            "crawlable": false,
        });
        let response = self
            .request(
                Method::PATCH,
                &Self::short_url_path(&identifier),
                &Self::domain_query(&identifier),
                Some(&body),
            )
            .await?;

        Ok(if response.status == 200 {
            Envelope::success(()).with_status_code(response.status)
        } else {
            self.map_failure(self.problem(&response))
        })
    }

    /// Delete a short URL.
    pub async fn delete_short_url(&self, identifier: &str) -> Result<Envelope<()>> {
        let identifier = match self.resolve_identifier(identifier).await? {
            Ok(identifier) => identifier,
            Err(failed) => return Ok(failed),
        };

        let response = self
            .request(
                Method::DELETE,
                &Self::short_url_path(&identifier),
                &Self::domain_query(&identifier),
                None,
            )
            .await?;

        Ok(if response.status == 204 {
            Envelope::success(()).with_status_code(response.status)
        } else {
            self.map_failure(self.problem(&response))
        })
    }

    /// Every short URL on the account, optionally only those on `domain`.
    ///
    /// Walks all result pages.
    pub async fn list_short_urls(&self, domain: Option<&str>) -> Result<Envelope<Vec<ShortUrl>>> {
        let mut urls = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut query = vec![("page", page.to_string())];
            if let Some(domain) = domain {
                query.push(("domain", domain.to_string()));
            }

            let response = self
                .request(Method::GET, "/short-urls", &query, None)
                .await?;
            if response.status != 200 {
                return Ok(self.map_failure(self.problem(&response)));
            }

            let listed: ShortUrlsResponse =
                HttpUtils::parse_json(&response.body, self.provider_name())?;
            urls.extend(listed.short_urls.data.into_iter().map(ShortUrl::from));

            let pagination = listed.short_urls.pagination;
            if page >= pagination.pages_count {
                break;
            }
            page += 1;
        }

        Ok(Envelope::success(urls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier(code: &str, domain: Option<&str>) -> ShortUrlIdentifier {
        ShortUrlIdentifier {
            short_code: code.to_string(),
            domain: domain.map(str::to_string),
        }
    }

    #[test]
    fn path_encodes_code() {
        assert_eq!(
            ShlinkProvider::short_url_path(&identifier("a b", None)),
            "/short-urls/a%20b"
        );
    }

    #[test]
    fn domain_query_only_when_scoped() {
        assert!(ShlinkProvider::domain_query(&identifier("abcd", None)).is_empty());
        assert_eq!(
            ShlinkProvider::domain_query(&identifier("abcd", Some("arv.cx"))),
            vec![("domain", "arv.cx".to_string())]
        );
    }
}
