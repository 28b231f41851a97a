//! Test builders: ergonomic constructors for on-disk data directories.
//!
//! These builders are designed for readability in test setup, not for
//! production use. They panic on I/O errors rather than returning `Result`.

use std::path::Path;

use codex_core::loader::{CHARACTER_INDEX_FILE, WEAPON_INDEX_FILE};
use codex_core::RecordLoader;
use tempfile::TempDir;

use super::fixtures::{CHARACTERS, CHARACTER_INDEX, WEAPONS, WEAPON_INDEX};

// ---------------------------------------------------------------------------
// DataDirBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a temporary data directory.
///
/// # Example
///
/// ```rust
/// let data = DataDirBuilder::new()
///     .character_index(r#"{"002": "Amber", "001": "Albedo"}"#)
///     .record("001", r#"{"name": "Albedo"}"#)
///     .build();
/// let loader = data.loader();
/// ```
pub struct DataDirBuilder {
    dir: TempDir,
}

impl DataDirBuilder {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp data dir"),
        }
    }

    pub fn character_index(self, body: &str) -> Self {
        self.file(CHARACTER_INDEX_FILE, body)
    }

    pub fn weapon_index(self, body: &str) -> Self {
        self.file(WEAPON_INDEX_FILE, body)
    }

    /// Write `{id}.json`. Characters and weapons share the directory.
    pub fn record(self, id: &str, body: &str) -> Self {
        self.file(&format!("{id}.json"), body)
    }

    pub fn file(self, name: &str, body: &str) -> Self {
        std::fs::write(self.dir.path().join(name), body).expect("write fixture file");
        self
    }

    pub fn build(self) -> DataDir {
        DataDir { dir: self.dir }
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A populated data directory, removed on drop.
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn loader(&self) -> RecordLoader {
        RecordLoader::new(self.dir.path())
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A data directory holding both indexes and every fixture record.
pub fn sample_data_dir() -> DataDir {
    let builder = DataDirBuilder::new()
        .character_index(CHARACTER_INDEX)
        .weapon_index(WEAPON_INDEX);
    CHARACTERS
        .iter()
        .chain(WEAPONS)
        .fold(builder, |b, (id, body)| b.record(id, body))
        .build()
}

/// An empty data directory.
pub fn empty_data_dir() -> DataDir {
    DataDirBuilder::new().build()
}
