//! Raw word sources and their normalization into a placement pool.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A raw dictionary as handed over by a collaborator.
///
/// Accepted shapes are a plain list of words or an object carrying the list
/// under a `words` key. Anything else deserializes to [`DictionarySource::Malformed`]
/// and contributes no words.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Deserialize))]
#[cfg_attr(feature = "std", serde(from = "serde_json::Value"))]
pub enum DictionarySource {
    List(Vec<String>),
    Wrapped(Vec<String>),
    Malformed,
}

impl Default for DictionarySource {
    fn default() -> Self {
        DictionarySource::List(Vec::new())
    }
}

impl DictionarySource {
    /// Raw entries, empty for malformed input.
    pub fn entries(&self) -> &[String] {
        match self {
            DictionarySource::List(words) | DictionarySource::Wrapped(words) => words,
            DictionarySource::Malformed => &[],
        }
    }
}

impl From<Vec<String>> for DictionarySource {
    fn from(words: Vec<String>) -> Self {
        DictionarySource::List(words)
    }
}

impl From<Vec<&str>> for DictionarySource {
    fn from(words: Vec<&str>) -> Self {
        DictionarySource::List(words.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for DictionarySource {
    fn from(words: &[&str]) -> Self {
        DictionarySource::List(words.iter().map(|w| w.to_string()).collect())
    }
}

#[cfg(feature = "std")]
impl From<serde_json::Value> for DictionarySource {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Array(items) => DictionarySource::List(scalar_entries(items)),
            Value::Object(mut map) => match map.remove("words") {
                Some(Value::Array(items)) => DictionarySource::Wrapped(scalar_entries(items)),
                _ => DictionarySource::Malformed,
            },
            _ => DictionarySource::Malformed,
        }
    }
}

#[cfg(feature = "std")]
impl DictionarySource {
    /// Parse dictionary file contents: a JSON list or `{"words": [...]}`
    /// object, otherwise one word per line.
    pub fn parse(text: &str) -> Self {
        use serde_json::Value;
        match serde_json::from_str::<Value>(text) {
            Ok(value @ (Value::Array(_) | Value::Object(_))) => DictionarySource::from(value),
            _ => DictionarySource::List(text.lines().map(str::to_string).collect()),
        }
    }
}

/// Scalars are kept in their textual form; nested values and nulls are dropped.
#[cfg(feature = "std")]
fn scalar_entries(items: Vec<serde_json::Value>) -> Vec<String> {
    use serde_json::Value;
    items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

/// Clean a raw word list for a grid of `grid_size` cells per side.
///
/// Entries are trimmed, empties and words longer than the grid are dropped,
/// the rest are uppercased with full Unicode case mapping (accents survive)
/// and de-duplicated keeping the first occurrence.
pub fn normalize_words(entries: &[String], grid_size: usize) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for raw in entries {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().count() > grid_size {
            continue;
        }
        let upper = trimmed.to_uppercase();
        // Some mappings expand (ß -> SS), so re-check the folded length.
        if upper.chars().count() > grid_size {
            continue;
        }
        if seen.insert(upper.clone()) {
            out.push(upper);
        }
    }
    out
}
