//! 共享测试工具和辅助函数

#![allow(dead_code)]

use serde_json::{Value, json};
use utilcli_provider::{
    LyricsConfig, LyricsProvider, PorkbunConfig, PorkbunProvider, ShlinkConfig, ShlinkProvider,
};
use wiremock::MockServer;

pub const ZONE: &str = "example.com";
pub const DEFAULT_IP: &str = "192.0.2.10";
pub const SHLINK_API_KEY: &str = "shlink-test-key";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 生成唯一的短码
pub fn generate_short_code() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("t{}", &uuid.to_string()[..8])
}

pub fn porkbun(server: &MockServer) -> PorkbunProvider {
    PorkbunProvider::new(PorkbunConfig {
        api_key: "pk1_test".to_string(),
        secret_api_key: "sk1_test".to_string(),
        zone: ZONE.to_string(),
        default_ip: DEFAULT_IP.to_string(),
        base_url: Some(server.uri()),
    })
    .expect("创建 Porkbun Provider 失败")
}

pub fn shlink(server: &MockServer) -> ShlinkProvider {
    ShlinkProvider::new(ShlinkConfig {
        domain: "arv.cx".to_string(),
        api_key: SHLINK_API_KEY.to_string(),
        base_url: Some(server.uri()),
    })
    .expect("创建 Shlink Provider 失败")
}

/// `server.uri()` 形如 `http://127.0.0.1:PORT`；拆成 host 和 port。
pub fn lyrics(server: &MockServer) -> LyricsProvider {
    let addr = server.address();
    LyricsProvider::new(LyricsConfig {
        host: format!("http://{}", addr.ip()),
        port: addr.port(),
    })
    .expect("创建 Lyrics Provider 失败")
}

/// Porkbun retrieve 响应中的一条记录
pub fn porkbun_record(id: &str, name: &str, record_type: &str, content: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": record_type,
        "content": content,
        "ttl": "300",
        "prio": "0",
        "notes": ""
    })
}

pub fn porkbun_records(records: Vec<Value>) -> Value {
    json!({ "status": "SUCCESS", "records": records })
}

pub fn porkbun_error(message: &str) -> Value {
    json!({ "status": "ERROR", "message": message })
}

/// Shlink `/domains` 响应
pub fn shlink_domains(domains: &[&str]) -> Value {
    let data: Vec<Value> = domains
        .iter()
        .enumerate()
        .map(|(i, d)| json!({ "domain": d, "isDefault": i == 0, "redirects": {} }))
        .collect();
    json!({ "domains": { "data": data } })
}

/// Shlink 短链接对象
pub fn shlink_short_url(code: &str, domain: Option<&str>, long_url: &str) -> Value {
    let host = domain.unwrap_or("arv.cx");
    json!({
        "shortCode": code,
        "shortUrl": format!("https://{host}/{code}"),
        "longUrl": long_url,
        "dateCreated": "2024-05-01T10:20:30+00:00",
        "visitsSummary": { "total": 3, "nonBots": 3, "bots": 0 },
        "tags": [],
        "meta": { "validSince": null, "validUntil": null, "maxVisits": null },
        "domain": domain,
        "title": null,
        "crawlable": false,
        "forwardQuery": true
    })
}

pub fn shlink_problem(status: u16, error_type: &str, title: &str, detail: &str) -> Value {
    json!({
        "type": error_type,
        "title": title,
        "detail": detail,
        "status": status
    })
}
