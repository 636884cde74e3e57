//! Alias-table normalization.
//!
//! Callers declare the record↔field mapping as a sequence of [`MapEntry`]
//! values: a bare field name (the external key defaults to the field name) or
//! an explicit `key → field` pair. [`AliasTable::normalize`] turns that
//! sequence into the canonical mapping the engine iterates at call time.
//!
//! Normalization never consults the target type. Field names the type does
//! not declare fail lazily at hydrate time and are silently skipped at
//! extract time, keeping this step fully decoupled from introspection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One caller-supplied mapping declaration.
///
/// Serde support uses the untagged shape alias tables take in configuration
/// files: a bare string, or an object `{"key": "...", "field": "..."}`.
///
/// ```rust
/// use hydrator::MapEntry;
///
/// let entries: Vec<MapEntry> =
///     serde_json::from_str(r#"["one", {"key": "first", "field": "one"}]"#)?;
/// assert_eq!(entries[0], MapEntry::Field("one".into()));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapEntry {
    /// Bare field name; the external key defaults to the field name.
    Field(String),
    /// Explicit external key mapped to a field name.
    Aliased {
        /// Record-facing name.
        key: String,
        /// Type-facing field name.
        field: String,
    },
}

impl From<&str> for MapEntry {
    fn from(field: &str) -> Self {
        Self::Field(field.to_string())
    }
}

impl From<String> for MapEntry {
    fn from(field: String) -> Self {
        Self::Field(field)
    }
}

impl From<(&str, &str)> for MapEntry {
    fn from((key, field): (&str, &str)) -> Self {
        Self::Aliased {
            key: key.to_string(),
            field: field.to_string(),
        }
    }
}

impl From<(String, String)> for MapEntry {
    fn from((key, field): (String, String)) -> Self {
        Self::Aliased { key, field }
    }
}

/// The canonical external-key → field-name mapping.
///
/// Entry order is the first-seen order of the input sequence, giving
/// deterministic hydrate/extract iteration; lookups by external key are O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Builds the canonical table from raw declarations.
    ///
    /// A duplicated external key overwrites the earlier field name in place
    /// (last write wins, first-seen position kept) — an ordinary map
    /// overwrite, not an error. Entries with an empty key or field name are
    /// dropped, so every canonical entry has both parts non-empty.
    /// Normalizing an already-canonical table of explicit pairs reproduces it
    /// unchanged.
    pub fn normalize<I, E>(raw: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<MapEntry>,
    {
        let mut table = Self::default();
        for entry in raw {
            let (key, field) = match entry.into() {
                MapEntry::Field(field) => (field.clone(), field),
                MapEntry::Aliased { key, field } => (key, field),
            };
            if key.is_empty() || field.is_empty() {
                continue;
            }
            match table.index.get(&key) {
                Some(&pos) => table.entries[pos].1 = field,
                None => {
                    table.index.insert(key.clone(), table.entries.len());
                    table.entries.push((key, field));
                }
            }
        }
        table
    }

    /// The field name mapped from `key`, if any.
    pub fn field_for(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    /// Iterates `(external_key, field_name)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f.as_str()))
    }

    /// Number of canonical entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
