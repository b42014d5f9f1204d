//! Utility modules.

/// Date/time serialization helpers for provider timestamps.
pub mod datetime;

/// Log sanitization utilities to keep API keys and long bodies out of logs.
pub mod log_sanitizer;

/// Lenient deserializers for providers that send numbers as strings.
pub mod serde_helpers;
