use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Envelope ============

/// Uniform success/failure wrapper returned by every client operation.
///
/// A remote API that answers but reports a failure produces a failed envelope
/// carrying the provider's message (and, for Shlink, the HTTP status and the
/// problem-detail `type`). Local validation and transport problems are
/// [`ProviderError`](crate::ProviderError)s instead.
///
/// Fields are private: an envelope cannot be changed once built.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Envelope<T> {
    /// A successful envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            status_code: None,
            error_type: None,
            data: Some(data),
        }
    }

    /// A failed envelope carrying the provider's message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            status_code: None,
            error_type: None,
            data: None,
        }
    }

    /// Attach the HTTP status the provider answered with.
    #[must_use]
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Attach the provider's error type, if it sent one.
    #[must_use]
    pub fn with_error_type(mut self, error_type: Option<String>) -> Self {
        self.error_type = error_type;
        self
    }

    pub fn is_ok(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transform the payload, keeping the rest of the envelope.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            message: self.message,
            status_code: self.status_code,
            error_type: self.error_type,
            data: self.data.map(f),
        }
    }

    /// Re-type a failed envelope so an outer operation can return it unchanged.
    pub(crate) fn forward_failure<U>(self) -> Envelope<U> {
        debug_assert!(!self.success, "only failed envelopes are forwarded");
        Envelope {
            success: false,
            message: self.message,
            status_code: self.status_code,
            error_type: self.error_type,
            data: None,
        }
    }
}

// ============ DNS Record Types ============

/// DNS record types accepted by the DNS provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Mx,
    Cname,
    Alias,
    Txt,
    Ns,
    Aaaa,
    Srv,
    Tlsa,
    Caa,
}

impl DnsRecordType {
    /// Every supported record type, in the provider's documented order.
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::Mx,
        Self::Cname,
        Self::Alias,
        Self::Txt,
        Self::Ns,
        Self::Aaaa,
        Self::Srv,
        Self::Tlsa,
        Self::Caa,
    ];

    /// Upper-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Mx => "MX",
            Self::Cname => "CNAME",
            Self::Alias => "ALIAS",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Aaaa => "AAAA",
            Self::Srv => "SRV",
            Self::Tlsa => "TLSA",
            Self::Caa => "CAA",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the fixed set.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(input))
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record in the managed zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-assigned record id.
    pub id: String,
    /// Fully-qualified host name.
    pub host: String,
    pub record_type: DnsRecordType,
    /// IP address or target.
    pub value: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl std::fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID    : {}", self.id)?;
        writeln!(f, "Host  : {}", self.host)?;
        writeln!(f, "Type  : {}", self.record_type)?;
        writeln!(f, "IP    : {}", self.value)?;
        write!(f, "TTL   : {}", self.ttl)
    }
}

/// Fields for a new DNS record, exactly as the user typed them.
///
/// Validation happens inside
/// [`PorkbunProvider::create_record`](crate::PorkbunProvider::create_record),
/// before anything is sent.
#[derive(Debug, Clone)]
pub struct CreateRecordRequest {
    /// Subdomain label; the zone is appended by the provider.
    pub host: String,
    /// Record content. Falls back to the configured default IP when `None`.
    pub ip: Option<String>,
    pub record_type: String,
    pub ttl: String,
}

impl CreateRecordRequest {
    /// An `A` record with TTL 300 pointing at the default IP.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ip: None,
            record_type: "A".to_string(),
            ttl: "300".to_string(),
        }
    }
}

/// What to delete: a record id, a bare label or a fully-qualified host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordTarget {
    /// Provider-assigned record id.
    Id(String),
    /// Single label such as `"www"`; matches any record having it as a host component.
    Label(String),
    /// Dotted host such as `"www.example.com"`; matches by exact equality.
    Hostname(String),
}

impl RecordTarget {
    /// Classify user input as a label (no dot) or a hostname (dotted).
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        if input.contains('.') {
            Self::Hostname(input.to_string())
        } else {
            Self::Label(input.to_string())
        }
    }

    /// The raw lookup value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(v) | Self::Label(v) | Self::Hostname(v) => v,
        }
    }

    /// Whether `record` is selected by this target.
    pub fn matches(&self, record: &DnsRecord) -> bool {
        match self {
            Self::Id(id) => &record.id == id,
            Self::Label(label) => record.host.split('.').any(|part| part == label),
            Self::Hostname(host) => &record.host == host,
        }
    }
}

// ============ Short URL Types ============

/// A short URL identifier resolved against the account's domains.
///
/// `domain` is `None` when the input did not name a known domain; the
/// provider's default domain applies then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlIdentifier {
    pub short_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Parameters for [`ShlinkProvider::shorten`](crate::ShlinkProvider::shorten).
#[derive(Debug, Clone, Default)]
pub struct ShortenRequest {
    pub url: String,
    /// Custom short code.
    pub slug: Option<String>,
    /// Short domain to use instead of the default one.
    pub alt_domain: Option<String>,
}

/// A short URL as reported by the shortener.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    #[serde(default, with = "crate::utils::datetime")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visits: Option<u64>,
}
