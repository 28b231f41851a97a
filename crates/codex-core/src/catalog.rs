//! Catalog accessor: enumerates every character named by the character index.
//!
//! Enumeration is index-driven. The identifiers are read from
//! `character_filtered.json` and each one is loaded through the same
//! [`RecordLoader`] path as a single-record lookup, so every element of the
//! listing is normalized exactly as `/characters/{id}` would return it.

use serde_json::Value;

use crate::error::LoadError;
use crate::loader::RecordLoader;
use crate::types::{EntityKind, EntityRef};

/// Identifiers named by an index document.
///
/// Objects contribute their keys (in the value's iteration order, which is
/// sorted after normalization); arrays contribute their string elements in
/// order. Any other shape names nothing.
pub fn index_identifiers(index: &Value) -> Vec<String> {
    match index {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Failure of [`list_all_characters`], tagged with what failed to load:
/// [`EntityKind::CharacterIndex`] for the index itself,
/// [`EntityKind::Character`] for one of the records it names.
#[derive(thiserror::Error, Debug)]
#[error("{kind} listing failed: {source}")]
pub struct ListingError {
    pub kind: EntityKind,
    #[source]
    pub source: LoadError,
}

/// Load every character listed in the character index.
///
/// A failure to load the index itself is returned as-is. Index entries with
/// no backing record (or an identifier outside the safe class) are skipped
/// with a warning; a record that exists but cannot be read or parsed aborts
/// the listing.
pub fn list_all_characters(loader: &RecordLoader) -> Result<Vec<Value>, ListingError> {
    let index = loader
        .load_entity(&EntityRef::CharacterIndex)
        .map_err(|source| ListingError {
            kind: EntityKind::CharacterIndex,
            source,
        })?;
    let ids = index_identifiers(&index);

    let mut records = Vec::with_capacity(ids.len());
    for id in &ids {
        match loader.load(EntityKind::Character, Some(id.as_str())) {
            Ok(record) => records.push(record),
            Err(LoadError::NotFound { target }) => {
                tracing::warn!(identifier = %id, %target, "indexed character has no record, skipping");
            }
            Err(source) => {
                return Err(ListingError {
                    kind: EntityKind::Character,
                    source,
                })
            }
        }
    }
    tracing::debug!(indexed = ids.len(), loaded = records.len(), "listed characters");
    Ok(records)
}

/// Outcome of [`check_catalog`].
#[derive(Debug, Default)]
pub struct CatalogReport {
    /// Files (indexes and records) that loaded and normalized cleanly.
    pub loaded: usize,
    /// Indexed records with no backing file, as `"<kind> <id>"`.
    pub missing: Vec<String>,
    /// Files that exist but could not be read or parsed, plus absent indexes.
    pub failures: Vec<LoadError>,
}

impl CatalogReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load both indexes and every record they name, collecting every failure
/// instead of stopping at the first.
pub fn check_catalog(loader: &RecordLoader) -> CatalogReport {
    let mut report = CatalogReport::default();

    for (index, kind) in [
        (EntityRef::CharacterIndex, EntityKind::Character),
        (EntityRef::WeaponIndex, EntityKind::Weapon),
    ] {
        let ids = match loader.load_entity(&index) {
            Ok(value) => {
                report.loaded += 1;
                index_identifiers(&value)
            }
            Err(e) => {
                report.failures.push(e);
                continue;
            }
        };

        for id in ids {
            match loader.load(kind, Some(id.as_str())) {
                Ok(_) => report.loaded += 1,
                Err(LoadError::NotFound { .. }) => report.missing.push(format!("{kind} {id}")),
                Err(e) => report.failures.push(e),
            }
        }
    }
    report
}
