//! Log sanitization utilities
//!
//! Request bodies sent to Porkbun carry `apikey`/`secretapikey`, and lyrics
//! bodies can be long. Both pass through here before reaching a log line.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// JSON keys whose values never reach the log.
const SECRET_KEYS: [&str; 2] = ["apikey", "secretapikey"];

/// Cut `s` to at most [`TRUNCATE_LIMIT`] bytes on a char boundary, noting the full size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{} <{} of {} bytes>", &s[..cut], cut, s.len())
}

/// Render a JSON request body for logging with credential values masked.
pub fn redact_secrets(body: &serde_json::Value) -> String {
    let mut body = body.clone();
    if let Some(map) = body.as_object_mut() {
        for key in SECRET_KEYS {
            if let Some(value) = map.get_mut(key) {
                *value = serde_json::Value::String("***".to_string());
            }
        }
    }
    truncate_for_log(&body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_limit_untouched() {
        assert_eq!(truncate_for_log("{\"status\":\"OK\"}"), "{\"status\":\"OK\"}");
        let at_limit = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&at_limit), at_limit);
    }

    #[test]
    fn long_body_cut_with_size() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        assert!(truncate_for_log(&s).ends_with(" <256 of 356 bytes>"));
    }

    #[test]
    fn cut_respects_char_boundaries() {
        // 3 bytes per char: the last boundary at or below 256 is 255
        let s = "歌".repeat(200);
        assert!(truncate_for_log(&s).ends_with(" <255 of 600 bytes>"));
    }

    #[test]
    fn credentials_are_masked() {
        let body = serde_json::json!({
            "apikey": "pk1_real",
            "secretapikey": "sk1_real",
            "name": "www",
        });
        let logged = redact_secrets(&body);
        assert!(!logged.contains("pk1_real"));
        assert!(!logged.contains("sk1_real"));
        assert!(logged.contains("\"name\":\"www\""));
    }

    #[test]
    fn non_object_body_passes_through() {
        assert_eq!(redact_secrets(&serde_json::json!([1, 2])), "[1,2]");
    }
}
