//! Porkbun API 类型定义

use serde::Deserialize;

use crate::utils::serde_helpers::{empty_string_as_none, string_or_number, u32_from_string_or_number};

/// Porkbun API 通用响应头：`status` 为 `SUCCESS` 或 `ERROR`
#[derive(Debug, Deserialize)]
pub struct PorkbunStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl PorkbunStatus {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("SUCCESS")
    }
}

/// `/dns/create` 响应
#[derive(Debug, Deserialize)]
pub struct CreatedRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

/// `/dns/retrieve` 响应
#[derive(Debug, Deserialize)]
pub struct RetrievedRecords {
    #[serde(default)]
    pub records: Vec<PorkbunRecord>,
}

/// `/ping` 响应
#[derive(Debug, Deserialize)]
pub struct PingResult {
    #[serde(rename = "yourIp")]
    pub your_ip: String,
}

/// Porkbun DNS Record 结构（响应）
#[derive(Debug, Deserialize)]
pub struct PorkbunRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// 完整域名
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(deserialize_with = "u32_from_string_or_number")]
    pub ttl: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_response_shape() {
        let json = r#"{
            "status": "SUCCESS",
            "records": [
                {"id": "106926652", "name": "borseth.ink", "type": "A",
                 "content": "1.1.1.1", "ttl": "600", "prio": "0", "notes": ""}
            ]
        }"#;
        let status: PorkbunStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_success());
        let body: RetrievedRecords = serde_json::from_str(json).unwrap();
        assert_eq!(body.records.len(), 1);
        assert_eq!(body.records[0].ttl, 600);
        assert!(body.records[0].notes.is_none());
    }

    #[test]
    fn error_response_shape() {
        let status: PorkbunStatus =
            serde_json::from_str(r#"{"status":"ERROR","message":"Invalid API key. (002)"}"#).unwrap();
        assert!(!status.is_success());
        assert_eq!(status.message.as_deref(), Some("Invalid API key. (002)"));
    }

    #[test]
    fn create_response_numeric_id() {
        let created: CreatedRecord =
            serde_json::from_str(r#"{"status":"SUCCESS","id":106926659}"#).unwrap();
        assert_eq!(created.id, "106926659");
    }
}
