//! Pluggable sources for the replacement map.
//!
//! The editing application fetches its map from a configuration endpoint
//! as a flat JSON object; tooling also reads the authored TOML format.
//! Both funnel into `ReplacementTable::from_entries`.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::{fs, process};

use clafrica_core::table::{parse_map_toml, MapConfigError, ReplacementTable};

#[derive(Debug, thiserror::Error)]
pub enum MapSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("unexpected payload shape: {0}")]
    Shape(String),

    #[error("map config error: {0}")]
    Config(#[from] MapConfigError),
}

/// A source that yields the raw code → replacement mapping.
pub trait MapSource {
    fn load(&self) -> Result<BTreeMap<String, String>, MapSourceError>;
}

/// Flat JSON object fetched from a configuration endpoint.
pub struct RemoteMapSource {
    url: String,
}

impl RemoteMapSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl MapSource for RemoteMapSource {
    fn load(&self) -> Result<BTreeMap<String, String>, MapSourceError> {
        let mut response = ureq::get(&self.url)
            .call()
            .map_err(|e| MapSourceError::Http(e.to_string()))?;
        let payload: serde_json::Value = response
            .body_mut()
            .read_json()
            .map_err(|e| MapSourceError::Http(e.to_string()))?;
        map_from_json(&payload)
    }
}

/// Authored TOML map file (the `[mappings]` format).
pub struct FileMapSource {
    path: PathBuf,
}

impl FileMapSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MapSource for FileMapSource {
    fn load(&self) -> Result<BTreeMap<String, String>, MapSourceError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(parse_map_toml(&text)?)
    }
}

/// Decode a JSON payload into the mapping. Anything but an object of
/// string values is rejected; the caller decides whether that degrades to
/// the inert table or aborts the command.
pub fn map_from_json(
    payload: &serde_json::Value,
) -> Result<BTreeMap<String, String>, MapSourceError> {
    let object = payload
        .as_object()
        .ok_or_else(|| MapSourceError::Shape("expected a JSON object".into()))?;

    let mut map = BTreeMap::new();
    for (key, value) in object {
        let Some(text) = value.as_str() else {
            return Err(MapSourceError::Shape(format!(
                "non-string replacement for key {key:?}"
            )));
        };
        map.insert(key.clone(), text.to_string());
    }
    Ok(map)
}

/// Resolve the table for conversion commands: explicit file (errors are
/// fatal), remote URL (degrades to the inert table with a warning, the way
/// the editing UI stays usable when its endpoint is down), or the embedded
/// default.
pub fn resolve_table(map_path: Option<&str>, map_url: Option<&str>) -> ReplacementTable {
    if let Some(path) = map_path {
        let map = FileMapSource::new(path).load().unwrap_or_else(|e| {
            eprintln!("Error reading map {path}: {e}");
            process::exit(1);
        });
        return ReplacementTable::from_entries(map);
    }
    if let Some(url) = map_url {
        return match RemoteMapSource::new(url).load() {
            Ok(map) => ReplacementTable::from_entries(map),
            Err(e) => {
                eprintln!("Warning: map fetch failed ({e}); transliteration disabled");
                ReplacementTable::empty()
            }
        };
    }
    ReplacementTable::default_map()
}
