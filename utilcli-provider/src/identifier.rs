//! Short URL identifier resolution.
//!
//! Users refer to a short URL in three ways: the bare code (`abcd`), the full
//! short URL (`https://arv.cx/abcd`) or a `domain/code` pair (`arv.cx/abcd`).
//! [`ShortUrlIdentifier::resolve`] normalizes all three without touching the
//! network; the caller supplies the account's domains.

use crate::providers::common::http_url;
use crate::types::ShortUrlIdentifier;

impl ShortUrlIdentifier {
    /// Resolve `raw` against the domains registered on the account.
    ///
    /// 1. An `http`/`https` URL with a host: host is the domain, the path without its
    ///    leading `/` is the code.
    /// 2. A `/`-separated string with at least one segment equal (case-sensitive) to a
    ///    known domain: last segment is the code, the one before it the domain.
    /// 3. Anything else is a bare code.
    pub fn resolve(raw: &str, known_domains: &[String]) -> Self {
        if let Some(url) = http_url(raw) {
            let host = url.host_str().unwrap_or_default();
            let domain = match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            };
            let path = url.path();
            let path = path.strip_prefix('/').unwrap_or(path);
            // url 会对 path 做 percent-encoding，这里还原成用户看到的 code
            let code = urlencoding::decode(path)
                .map_or_else(|_| path.to_string(), |c| c.into_owned());
            return Self {
                short_code: code,
                domain: Some(domain),
            };
        }

        let segments: Vec<&str> = raw.split('/').collect();
        let names_known_domain = segments
            .iter()
            .any(|segment| known_domains.iter().any(|d| d == segment));

        if segments.len() > 1
            && names_known_domain
            && let [.., domain, code] = segments.as_slice()
        {
            return Self {
                short_code: (*code).to_string(),
                domain: Some((*domain).to_string()),
            };
        }

        Self {
            short_code: raw.to_string(),
            domain: None,
        }
    }

    /// Whether the identifier names a specific domain.
    pub fn has_domain(&self) -> bool {
        self.domain.is_some()
    }
}
