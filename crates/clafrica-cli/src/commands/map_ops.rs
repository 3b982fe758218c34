use std::collections::BTreeMap;
use std::fs;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::commands::die;
use crate::map_source::{resolve_table, MapSource, RemoteMapSource};

/// Serialization wrapper producing the `[mappings]` file format.
#[derive(Serialize)]
struct MapFile<'a> {
    mappings: &'a BTreeMap<String, String>,
}

pub fn fetch(url: &str, output: &str) {
    eprintln!("Fetching map from {url}...");
    let map = die!(RemoteMapSource::new(url).load(), "Error fetching map: {}");
    let text = die!(
        toml::to_string_pretty(&MapFile { mappings: &map }),
        "Error encoding map: {}"
    );
    die!(fs::write(output, text), "Error writing map file: {}");
    eprintln!("Wrote {} mappings to {output}", map.len());
}

pub fn inspect(map_path: Option<&str>, list: bool) {
    let table = resolve_table(map_path, None);
    println!("Entries:        {}", table.len());
    println!("Max key length: {}", table.max_key_len());
    println!("Prefixes:       {}", table.prefix_count());

    if list {
        let mut rows: Vec<(&str, &str)> = table.iter().collect();
        rows.sort_unstable();

        // Pad by terminal columns, not characters: replacements carry
        // zero-width combining marks and the keys must stay aligned.
        let key_width = rows.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
        println!();
        for (key, replacement) in rows {
            let pad = " ".repeat(key_width.saturating_sub(key.width()));
            let codepoints: Vec<String> = replacement
                .chars()
                .map(|c| format!("U+{:04X}", c as u32))
                .collect();
            println!("  {key}{pad}  {replacement}  ({})", codepoints.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use clafrica_core::table::parse_map_toml;

    use super::*;

    #[test]
    fn fetched_map_round_trips_through_the_file_format() {
        let mut map = BTreeMap::new();
        map.insert("a~".to_string(), "ã".to_string());
        map.insert("az%".to_string(), "ɑ́".to_string());
        map.insert("a\"".to_string(), "ä".to_string());

        let text = toml::to_string_pretty(&MapFile { mappings: &map }).unwrap();
        let parsed = parse_map_toml(&text).unwrap();
        assert_eq!(parsed, map);
    }
}
