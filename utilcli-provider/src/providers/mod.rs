//! Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod porkbun;
mod shlink;
mod utilapi;

pub use porkbun::{PorkbunConfig, PorkbunProvider};
pub use shlink::{ShlinkConfig, ShlinkProvider};
pub use utilapi::{DeferredLyrics, LYRICS_SOURCES, LyricsConfig, LyricsProvider, LyricsResult};
