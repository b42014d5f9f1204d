//! # utilcli-provider
//!
//! Async clients for the three services behind `utilcli`.
//!
//! ## Supported Providers
//!
//! | Provider | Client | Auth Method |
//! |----------|--------|-------------|
//! | [Porkbun](https://porkbun.com/api/json/v3/documentation) DNS | [`PorkbunProvider`] | API key pair in the JSON body |
//! | [Shlink](https://shlink.io/documentation/api-docs/) URL shortener | [`ShlinkProvider`] | `X-Api-Key` header |
//! | UtilAPI lyrics | [`LyricsProvider`] | None |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use utilcli_provider::{CreateRecordRequest, PorkbunConfig, PorkbunProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = PorkbunProvider::new(PorkbunConfig {
//!         api_key: "pk1_xxx".to_string(),
//!         secret_api_key: "sk1_xxx".to_string(),
//!         zone: "example.com".to_string(),
//!         default_ip: "203.0.113.7".to_string(),
//!         base_url: None,
//!     })?;
//!
//!     let created = provider.create_record(&CreateRecordRequest::new("www")).await?;
//!     match created.data() {
//!         Some(record) => println!("{record}"),
//!         None => eprintln!("{}", created.message().unwrap_or_default()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Two layers:
//!
//! - A service that answers but refuses comes back as a failed [`Envelope`],
//!   carrying the service's own message.
//! - Bad input rejected before sending, and transport problems, are
//!   [`ProviderError`]s. [`ProviderError::is_expected`] tells the two apart.
//!
//! Nothing is retried.

mod error;
mod http_client;
mod identifier;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export types
pub use types::{
    CreateRecordRequest, DnsRecord, DnsRecordType, Envelope, RecordTarget, ShortUrl,
    ShortUrlIdentifier, ShortenRequest,
};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete providers
pub use providers::{
    DeferredLyrics, LYRICS_SOURCES, LyricsConfig, LyricsProvider, LyricsResult, PorkbunConfig,
    PorkbunProvider, ShlinkConfig, ShlinkProvider,
};
