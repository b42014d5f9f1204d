//! Provider 公共工具函数

use std::net::IpAddr;

use url::Url;

use crate::error::{ProviderError, Result};
use crate::types::DnsRecordType;

// ============ 记录类型转换 ============

/// 将字符串转换为 `DnsRecordType`（不区分大小写）
pub fn parse_record_type(record_type: &str, provider: &str) -> Result<DnsRecordType> {
    DnsRecordType::parse(record_type).ok_or_else(|| ProviderError::InvalidRecordType {
        provider: provider.to_string(),
        record_type: record_type.to_string(),
    })
}

// ============ 参数校验 ============

/// 校验 IPv4 / IPv6 字面量，返回规范化后的地址
pub fn parse_ip_address(address: &str, provider: &str) -> Result<IpAddr> {
    address
        .trim()
        .parse()
        .map_err(|_| ProviderError::InvalidIpAddress {
            provider: provider.to_string(),
            address: address.to_string(),
        })
}

/// 校验 TTL 为无符号整数
pub fn parse_ttl(ttl: &str, provider: &str) -> Result<u32> {
    ttl.trim().parse().map_err(|_| ProviderError::InvalidTtl {
        provider: provider.to_string(),
        ttl: ttl.to_string(),
    })
}

/// Absolute URL with an `http`/`https` scheme and a non-empty host, or `None`.
pub fn http_url(input: &str) -> Option<Url> {
    let url = Url::parse(input).ok()?;
    let scheme_ok = matches!(url.scheme(), "http" | "https");
    let host_ok = url.host_str().is_some_and(|h| !h.is_empty());
    (scheme_ok && host_ok).then_some(url)
}

/// 校验 URL（必须为 http/https 且包含 host）
pub fn validate_http_url(input: &str, provider: &str) -> Result<Url> {
    http_url(input).ok_or_else(|| ProviderError::InvalidUrl {
        provider: provider.to_string(),
        url: input.to_string(),
    })
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 将相对名称转换为完整域名
/// 如: "www" + "example.com" -> "www.example.com"
/// 如: "@" + "example.com" -> "example.com"
pub fn relative_to_full_name(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);

    if relative_name == "@" || relative_name.is_empty() {
        zone
    } else {
        format!("{relative_name}.{zone}")
    }
}
