use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct MapConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MapConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty key")]
    EmptyKey,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty replacement for key: {0}")]
    EmptyValue(String),
}

/// Parse TOML text into a sorted `BTreeMap<code, replacement>`.
///
/// Strict: an authored map file should fail loudly on a bad entry, unlike
/// the tolerant remote path that funnels through
/// [`ReplacementTable::from_entries`](super::ReplacementTable::from_entries).
pub fn parse_map_toml(toml_str: &str) -> Result<BTreeMap<String, String>, MapConfigError> {
    let config: MapConfig =
        toml::from_str(toml_str).map_err(|e| MapConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(MapConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() {
            return Err(MapConfigError::EmptyKey);
        }
        if !key.is_ascii() {
            return Err(MapConfigError::NonAsciiKey(key.clone()));
        }
        if value.is_empty() {
            return Err(MapConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
