use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a dictionary file.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON dictionary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid JSON5 dictionary: {0}")]
    Json5(#[from] json5::Error),
    #[error("dictionary must be an object mapping words to values")]
    NotAnObject,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    folded: String,
    word: String,
    value: V,
}

/// Word list used for completion, with an associated value per word.
///
/// Entries are kept sorted by their lowercased form (ties broken by the
/// original spelling), so prefix lookups are a binary search and "first
/// match" always means the lexicographically smallest candidate.
#[derive(Debug, Clone)]
pub struct Dictionary<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Dictionary<V> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a word, returning the previous value for that exact spelling.
    pub fn insert(&mut self, word: impl Into<String>, value: V) -> Option<V> {
        let word = word.into();
        let folded = word.to_lowercase();
        match self.search(&folded, &word) {
            Ok(idx) => Some(std::mem::replace(&mut self.entries[idx].value, value)),
            Err(idx) => {
                self.entries.insert(
                    idx,
                    Entry {
                        folded,
                        word,
                        value,
                    },
                );
                None
            }
        }
    }

    /// Value stored for an exact spelling.
    pub fn get(&self, word: &str) -> Option<&V> {
        self.search(&word.to_lowercase(), word)
            .ok()
            .map(|idx| &self.entries[idx].value)
    }

    /// All entries in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|e| (e.word.as_str(), &e.value))
    }

    /// First word completing `prefix`, ignoring case.
    ///
    /// Words equal to the prefix (ignoring case) are not completions. Blank
    /// prefixes never match.
    pub fn suggestion(&self, prefix: &str) -> Option<&str> {
        self.completions(prefix).next().map(|(word, _)| word)
    }

    /// Every word completing `prefix`, in lookup order.
    pub fn suggestions(&self, prefix: &str) -> Vec<(&str, &V)> {
        self.completions(prefix).collect()
    }

    fn completions(&self, prefix: &str) -> impl Iterator<Item = (&str, &V)> {
        // U+FEFF counts as blank too, as it does for browser string trimming.
        let blank = prefix
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .is_empty();
        let folded = prefix.to_lowercase();
        let range = if blank { &[][..] } else { self.prefix_range(&folded) };
        range
            .iter()
            .filter(move |e| e.folded != folded)
            .map(|e| (e.word.as_str(), &e.value))
    }

    fn prefix_range(&self, folded_prefix: &str) -> &[Entry<V>] {
        let lower = self
            .entries
            .partition_point(|e| e.folded.as_str() < folded_prefix);
        let rest = &self.entries[lower..];
        let len = rest.partition_point(|e| e.folded.starts_with(folded_prefix));
        &rest[..len]
    }

    fn search(&self, folded: &str, word: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|e| (e.folded.as_str(), e.word.as_str()).cmp(&(folded, word)))
    }
}

impl<V> Default for Dictionary<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Dictionary<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Dictionary<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (word, value) in iter {
            self.insert(word, value);
        }
    }
}

/// Value attached to a word in a dictionary file.
///
/// Displays strings without quotes so they can be shown as suggestion
/// details directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata(pub Value);

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Null => Ok(()),
            other => write!(f, "{other}"),
        }
    }
}

impl Dictionary<Metadata> {
    /// Parse a JSON object of `word: value` pairs.
    pub fn from_json_str(source: &str) -> Result<Self, DictionaryError> {
        Self::from_value(serde_json::from_str(source)?)
    }

    /// Parse a JSON5 object of `word: value` pairs.
    pub fn from_json5_str(source: &str) -> Result<Self, DictionaryError> {
        Self::from_value(json5::from_str(source)?)
    }

    /// Load a dictionary file. `.json5` files are parsed as JSON5, anything
    /// else as JSON.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let source = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json5 = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json5"));
        let dict = if is_json5 {
            Self::from_json5_str(&source)?
        } else {
            Self::from_json_str(&source)?
        };
        debug!(path = %path.display(), words = dict.len(), "loaded dictionary");
        Ok(dict)
    }

    fn from_value(value: Value) -> Result<Self, DictionaryError> {
        match value {
            Value::Object(map) => Ok(map.into_iter().map(|(k, v)| (k, Metadata(v))).collect()),
            _ => Err(DictionaryError::NotAnObject),
        }
    }
}
