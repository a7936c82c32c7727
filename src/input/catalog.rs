//! Translation catalog store.
//!
//! A catalog file is a JSON array of records:
//!
//! ```json
//! [
//!    {
//!       "ID": "Hello",
//!       "Translation": "Bonjour",
//!       "Dirty": true
//!    }
//! ]
//! ```
//!
//! Records are keyed by ID in memory and written back sorted by ID with a
//! 3-space indent, so repeated runs produce byte-identical output.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

/// Indentation used when writing catalogs.
const INDENT: &[u8] = b"   ";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to access catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicated key found: {0}")]
    DuplicateId(String),
}

/// One translatable string of a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    #[serde(rename = "ID", alias = "id")]
    pub id: String,

    #[serde(rename = "Translation", alias = "translation")]
    pub translation: String,

    /// The translation text is stale and needs review.
    #[serde(rename = "Dirty", alias = "dirty", default, skip_serializing_if = "is_false")]
    pub dirty: bool,

    /// Fields this tool does not interpret, kept as-is on write.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde の skip_serializing_if は参照を要求する
const fn is_false(value: &bool) -> bool {
    !*value
}

impl TranslationRecord {
    /// Creates a clean record whose translation is the identifier itself.
    #[must_use]
    pub fn placeholder(id: impl Into<String>) -> Self {
        let id = id.into();
        Self { translation: id.clone(), id, dirty: false, extra: serde_json::Map::new() }
    }

    #[must_use]
    pub fn new(id: impl Into<String>, translation: impl Into<String>, dirty: bool) -> Self {
        Self { id: id.into(), translation: translation.into(), dirty, extra: serde_json::Map::new() }
    }
}

/// Mapping from identifier to record for one locale file.
///
/// Every record's `id` equals its key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: BTreeMap<String, TranslationRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records, rejecting duplicate identifiers.
    pub fn from_records(
        records: impl IntoIterator<Item = TranslationRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for record in records {
            if catalog.contains(&record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            catalog.insert(record);
        }
        Ok(catalog)
    }

    /// Parses a catalog from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<TranslationRecord> = serde_json::from_str(text)?;
        Self::from_records(records)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        tracing::debug!(path = %path.display(), "Loading catalog");
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Encodes the catalog as an indented JSON array sorted by identifier.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        let records: Vec<&TranslationRecord> = self.records().collect();
        records.serialize(&mut serializer)?;

        // serde_json は常に妥当な UTF-8 を出力する
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes the catalog to `path`, readable by everyone and writable by the owner.
    pub fn store(&self, path: &Path) -> Result<(), CatalogError> {
        let encoded = self.to_json()?;
        fs::write(path, encoded)?;
        set_catalog_permissions(path)?;
        tracing::debug!(path = %path.display(), records = self.len(), "Stored catalog");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TranslationRecord> {
        self.records.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Inserts `record` under its own identifier, returning the record it replaced.
    pub fn insert(&mut self, record: TranslationRecord) -> Option<TranslationRecord> {
        self.records.insert(record.id.clone(), record)
    }

    pub fn remove(&mut self, id: &str) -> Option<TranslationRecord> {
        self.records.remove(id)
    }

    /// Keeps only the records for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.records.retain(|id, _| keep(id));
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in identifier order.
    pub fn records(&self) -> btree_map::Values<'_, String, TranslationRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(unix)]
fn set_catalog_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn set_catalog_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
