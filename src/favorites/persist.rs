//! Flat `key = value` preference file holding the favorites list.

use std::fs;
use std::path::Path;

use crate::state::FavoritesSet;

/// Preference key under which favorites are stored.
pub const FAVORITES_KEY: &str = "favorites";

/// What: Check if a line should be skipped (empty or comment).
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Output:
/// - `Some((key, value))` split on the first `=` and trimmed, `None` without `=`.
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.trim().split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// What: Decode a comma-joined id list.
///
/// Output:
/// - Set of ids; blank entries are ignored.
pub fn decode_ids(value: &str) -> FavoritesSet {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Encode ids as a comma-joined list in set order.
pub fn encode_ids(ids: &FavoritesSet) -> String {
    ids.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// What: Read the favorites set from a preference file.
///
/// Inputs:
/// - `path`: Preference file
///
/// Output:
/// - Stored set; empty when the file or key is missing or unreadable.
pub fn load_favorites(path: &Path) -> FavoritesSet {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "[Favorites] Failed to read preferences");
            }
            return FavoritesSet::new();
        }
    };
    content
        .lines()
        .rev()
        .filter(|l| !skip_comment_or_empty(l))
        .filter_map(parse_key_value)
        .find(|(k, _)| *k == FAVORITES_KEY)
        .map(|(_, v)| decode_ids(v))
        .unwrap_or_default()
}

/// What: Write the favorites set into a preference file.
///
/// Inputs:
/// - `path`: Preference file
/// - `ids`: Set to store
///
/// Output:
/// - `Ok(())` on success, IO error otherwise.
///
/// Details:
/// - Other keys and comments already in the file are kept; previous favorites lines are replaced.
pub fn save_favorites(path: &Path, ids: &FavoritesSet) -> std::io::Result<()> {
    let existing = fs::read_to_string(path).unwrap_or_default();
    let mut out: Vec<String> = existing
        .lines()
        .filter(|l| {
            skip_comment_or_empty(l) || parse_key_value(l).is_none_or(|(k, _)| k != FAVORITES_KEY)
        })
        .map(ToString::to_string)
        .collect();
    out.push(format!("{FAVORITES_KEY} = {}", encode_ids(ids)));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, out.join("\n") + "\n")
}
