//! Classification properties contributed by extensions.
//!
//! Extensions ship a small `.properties` file whose values are
//! comma-separated lists of artifact coordinates. The four keys below are
//! the ones a model builder understands; anything else is ignored.

use std::collections::BTreeMap;
use std::path::Path;

use depmodel_util::errors::DepModelError;

pub const PARENT_FIRST_ARTIFACTS: &str = "parent-first-artifacts";
pub const RUNNER_PARENT_FIRST_ARTIFACTS: &str = "runner-parent-first-artifacts";
pub const EXCLUDED_ARTIFACTS: &str = "excluded-artifacts";
pub const LESSER_PRIORITY_ARTIFACTS: &str = "lesser-priority-artifacts";

/// The recognized classification keys, in the order they are applied.
pub const CLASSIFICATION_KEYS: [&str; 4] = [
    PARENT_FIRST_ARTIFACTS,
    RUNNER_PARENT_FIRST_ARTIFACTS,
    EXCLUDED_ARTIFACTS,
    LESSER_PRIORITY_ARTIFACTS,
];

/// Loads a Java-style `.properties` file.
pub fn load_properties(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(DepModelError::Io)?;
    Ok(parse_properties(&content))
}

/// Parse `.properties` text.
///
/// Supports `key=value`, `key: value` and `key value`, `#` and `!` comments,
/// and a trailing backslash to continue a value on the next line. Later
/// duplicates overwrite earlier ones.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let mut logical = trimmed.to_string();
        while logical.ends_with('\\') {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim()),
                None => break,
            }
        }
        let (key, value) = split_key_value(&logical);
        map.insert(key, value.trim().to_string());
    }
    map
}

/// Split a logical line into key and value.
///
/// The key ends at the first unescaped `=`, `:` or whitespace. One `=` or
/// `:` after it, with surrounding whitespace, is the separator; a backslash
/// in the key escapes the next character.
fn split_key_value(line: &str) -> (String, &str) {
    let mut key = String::new();
    let mut rest = "";
    let mut chars = line.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    key.push(escaped);
                }
            }
            '=' | ':' => {
                return (key, line[idx + c.len_utf8()..].trim_start());
            }
            c if c.is_whitespace() => {
                rest = line[idx..].trim_start();
                break;
            }
            c => key.push(c),
        }
    }
    let value = rest
        .strip_prefix(['=', ':'])
        .map(str::trim_start)
        .unwrap_or(rest);
    (key, value)
}

/// True if `properties` carries at least one classification key.
pub fn has_classification_keys(properties: &BTreeMap<String, String>) -> bool {
    CLASSIFICATION_KEYS
        .iter()
        .any(|key| properties.contains_key(*key))
}
