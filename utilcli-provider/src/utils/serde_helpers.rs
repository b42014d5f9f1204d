//! Porkbun answers with ids and TTLs as JSON strings (`"ttl": "600"`) in some
//! endpoints and as numbers in others. These helpers accept both.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
}

/// Deserialize a string or number into a `String`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::U64(n) => n.to_string(),
        StringOrNumber::I64(n) => n.to_string(),
    })
}

/// Deserialize a string or number into a `u32`.
pub fn u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s
            .trim()
            .parse()
            .map_err(|e| Error::custom(format!("invalid integer '{s}': {e}"))),
        StringOrNumber::U64(n) => u32::try_from(n).map_err(Error::custom),
        StringOrNumber::I64(n) => u32::try_from(n).map_err(Error::custom),
    }
}

/// Deserialize an optional string, turning `""` into `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
