use serde::{Deserialize, Serialize};

/// Unified error type for all provider operations.
///
/// Each variant includes a `provider` field identifying which client produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Error Classes
///
/// - **Local validation**: [`InvalidRecordType`](Self::InvalidRecordType),
///   [`InvalidIpAddress`](Self::InvalidIpAddress), [`InvalidTtl`](Self::InvalidTtl),
///   [`InvalidUrl`](Self::InvalidUrl), [`UnknownDomain`](Self::UnknownDomain),
///   [`InvalidSource`](Self::InvalidSource), [`AmbiguousOrMissingHost`](Self::AmbiguousOrMissingHost),
///   [`InvalidParameter`](Self::InvalidParameter) and [`RecordNotFound`](Self::RecordNotFound).
///   Raised before the request that depends on them is sent.
/// - **Transport**: [`RequestFailed`](Self::RequestFailed): the remote API could not be
///   reached or answered with something that could not be read.
///
/// A remote API that answers with a non-success status is *not* an error: it is surfaced
/// as a failed [`Envelope`](crate::Envelope). Nothing is retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The record type is not one of the supported DNS record types.
    InvalidRecordType {
        /// Provider that produced the error.
        provider: String,
        /// The rejected record type string.
        record_type: String,
    },

    /// The value is not an IPv4 or IPv6 literal.
    InvalidIpAddress {
        /// Provider that produced the error.
        provider: String,
        /// The rejected address.
        address: String,
    },

    /// The TTL is not an unsigned integer.
    InvalidTtl {
        /// Provider that produced the error.
        provider: String,
        /// The rejected TTL string.
        ttl: String,
    },

    /// The URL is missing an `http`/`https` scheme or a host.
    InvalidUrl {
        /// Provider that produced the error.
        provider: String,
        /// The rejected URL.
        url: String,
    },

    /// The requested short domain is not registered on the account.
    UnknownDomain {
        /// Provider that produced the error.
        provider: String,
        /// The requested domain.
        domain: String,
        /// Domains the account owns.
        available: Vec<String>,
    },

    /// None of the requested lyrics sources is recognized.
    InvalidSource {
        /// Provider that produced the error.
        provider: String,
        /// The sources as supplied by the caller.
        sources: Vec<String>,
        /// Sources the lyrics service understands.
        available: Vec<String>,
    },

    /// A host or label matched no DNS record, or more than one.
    AmbiguousOrMissingHost {
        /// Provider that produced the error.
        provider: String,
        /// The host, label or id that was looked up.
        host: String,
        /// Number of records that matched (0 when missing).
        matches: usize,
    },

    /// The specified DNS record was not found.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// ID of the record that was not found.
        record_id: String,
    },

    /// A request parameter is invalid (e.g., empty host).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The request could not be completed: connection failure, timeout,
    /// unreadable body or malformed JSON.
    RequestFailed {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::RequestFailed { .. })
    }

    /// Name of the provider that produced the error.
    pub fn provider(&self) -> &str {
        match self {
            Self::InvalidRecordType { provider, .. }
            | Self::InvalidIpAddress { provider, .. }
            | Self::InvalidTtl { provider, .. }
            | Self::InvalidUrl { provider, .. }
            | Self::UnknownDomain { provider, .. }
            | Self::InvalidSource { provider, .. }
            | Self::AmbiguousOrMissingHost { provider, .. }
            | Self::RecordNotFound { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::RequestFailed { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecordType {
                provider,
                record_type,
            } => {
                write!(f, "[{provider}] Invalid record type: {record_type}")
            }
            Self::InvalidIpAddress { provider, address } => {
                write!(f, "[{provider}] Invalid IP address: {address}")
            }
            Self::InvalidTtl { provider, ttl } => {
                write!(f, "[{provider}] TTL must be an integer, got '{ttl}'")
            }
            Self::InvalidUrl { provider, url } => {
                write!(
                    f,
                    "[{provider}] Invalid url '{url}', make sure it starts with http:// or https://"
                )
            }
            Self::UnknownDomain {
                provider,
                domain,
                available,
            } => {
                write!(
                    f,
                    "[{provider}] Unknown domain '{domain}'. Available domain: \"{}\"",
                    available.join(", ")
                )
            }
            Self::InvalidSource {
                provider,
                sources,
                available,
            } => {
                write!(
                    f,
                    "[{provider}] Invalid lyrics source '{}'. Source available: \"{}\"",
                    sources.join(","),
                    available.join(", ")
                )
            }
            Self::AmbiguousOrMissingHost {
                provider,
                host,
                matches,
            } => {
                if *matches == 0 {
                    write!(f, "[{provider}] No record matches '{host}'")
                } else {
                    write!(
                        f,
                        "[{provider}] '{host}' matches {matches} records, narrow it down with a record type or use the record id"
                    )
                }
            }
            Self::RecordNotFound {
                provider,
                record_id,
            } => {
                write!(f, "[{provider}] Record '{record_id}' not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::RequestFailed { provider, detail } => {
                write!(f, "[{provider}] Request failed: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
