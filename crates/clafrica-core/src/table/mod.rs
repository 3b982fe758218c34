//! Replacement table: code → replacement lookups plus the derived bounds
//! the matcher scans with.

mod config;
mod default;

pub use config::{parse_map_toml, MapConfigError};
pub use default::DEFAULT_TOML;

use std::collections::{HashMap, HashSet};

use tracing::debug;

/// Immutable code → replacement table.
///
/// Built once per (re)load; hot reload is a rebuild plus an `Arc` swap in
/// the caller, so concurrent field instances never need a lock.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    entries: HashMap<String, String>,
    /// Longest key length in characters; 0 for the empty table.
    max_key_len: usize,
    /// Every strict, non-empty prefix of every key. Membership means "this
    /// exact string could still grow into a longer code".
    prefixes: HashSet<String>,
}

impl ReplacementTable {
    /// The inert table: no entries, every lookup misses, the engine no-ops.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from arbitrary `(code, replacement)` pairs.
    ///
    /// Never fails: empty codes and empty replacements are dropped (they
    /// could never match a token), later duplicates win. This is the path
    /// for maps decoded from a remote source, where a malformed payload
    /// must degrade to an inert table rather than raise into the editor.
    pub fn from_entries<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries: HashMap<String, String> = HashMap::new();
        for (key, value) in pairs {
            if key.is_empty() || value.is_empty() {
                continue;
            }
            entries.insert(key, value);
        }

        let mut max_key_len = 0;
        let mut prefixes = HashSet::new();
        for key in entries.keys() {
            let chars: Vec<char> = key.chars().collect();
            max_key_len = max_key_len.max(chars.len());
            for end in 1..chars.len() {
                prefixes.insert(chars[..end].iter().collect());
            }
        }

        debug!(
            entries = entries.len(),
            max_key_len,
            prefixes = prefixes.len(),
            "replacement table built"
        );

        Self {
            entries,
            max_key_len,
            prefixes,
        }
    }

    /// Build from the strict TOML map format (`[mappings]`).
    pub fn from_toml(toml_str: &str) -> Result<Self, MapConfigError> {
        Ok(Self::from_entries(parse_map_toml(toml_str)?))
    }

    /// Build from the embedded default map.
    pub fn default_map() -> Self {
        Self::from_toml(DEFAULT_TOML).expect("embedded default map must be valid")
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// True if `chunk` is a strict prefix of at least one code.
    pub fn is_prefix(&self, chunk: &str) -> bool {
        self.prefixes.contains(chunk)
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_table_is_inert() {
        let table = ReplacementTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.max_key_len(), 0);
        assert_eq!(table.prefix_count(), 0);
        assert_eq!(table.get("a~"), None);
    }

    #[test]
    fn builds_bounds_and_prefixes() {
        let table = ReplacementTable::from_entries(pairs(&[("az%", "ɑ́"), ("az", "ɑ")]));
        assert_eq!(table.len(), 2);
        assert_eq!(table.max_key_len(), 3);
        // Strict prefixes of "az%" are "a" and "az"; "az%" itself never
        // enters the set.
        assert!(table.is_prefix("a"));
        assert!(table.is_prefix("az"));
        assert!(!table.is_prefix("az%"));
    }

    #[test]
    fn full_key_without_extension_is_not_a_prefix() {
        let table = ReplacementTable::from_entries(pairs(&[("a~", "ã"), ("az", "ɑ")]));
        assert!(!table.is_prefix("a~"));
        assert!(!table.is_prefix("az"));
        assert!(table.is_prefix("a"));
    }

    #[test]
    fn drops_empty_keys_and_values() {
        let table = ReplacementTable::from_entries(pairs(&[
            ("", "junk"),
            ("ok", ""),
            ("a~", "ã"),
        ]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.max_key_len(), 2);
        assert_eq!(table.get("ok"), None);
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let table =
            ReplacementTable::from_entries(pairs(&[("a~", "first"), ("a~", "ã")]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a~"), Some("ã"));
    }

    #[test]
    fn key_length_is_measured_in_characters() {
        // The tolerant path accepts non-ASCII keys; lengths must still be
        // character counts, not byte counts.
        let table = ReplacementTable::from_entries(pairs(&[("ñ~", "x")]));
        assert_eq!(table.max_key_len(), 2);
        assert!(table.is_prefix("ñ"));
    }

    #[test]
    fn from_toml_strictness_propagates() {
        assert!(ReplacementTable::from_toml("[mappings]\n").is_err());
        let table = ReplacementTable::from_toml("[mappings]\n\"a~\" = \"ã\"\n").unwrap();
        assert_eq!(table.get("a~"), Some("ã"));
    }
}
