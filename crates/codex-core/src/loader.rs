//! Record loader: resolves an [`EntityRef`] to a file under the data
//! directory, reads it, parses it and hands back the normalized value.
//!
//! The data directory is fixed when the loader is built. Each call is
//! independent: there is no cache and no state shared between calls, and the
//! file handle lives only for the duration of the single read.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{LoadError, LoadResult};
use crate::normalizer::normalize;
use crate::types::{EntityKind, EntityRef};

/// File backing [`EntityRef::CharacterIndex`].
pub const CHARACTER_INDEX_FILE: &str = "character_filtered.json";
/// File backing [`EntityRef::WeaponIndex`].
pub const WEAPON_INDEX_FILE: &str = "weapons.json";

/// Loads and normalizes records from one data directory.
#[derive(Debug, Clone)]
pub struct RecordLoader {
    base_dir: PathBuf,
}

impl RecordLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file backing `entity`. Pure; does not touch the disk.
    pub fn resolve(&self, entity: &EntityRef) -> PathBuf {
        let file_name = match entity {
            EntityRef::CharacterIndex => CHARACTER_INDEX_FILE.to_string(),
            EntityRef::WeaponIndex => WEAPON_INDEX_FILE.to_string(),
            EntityRef::Character(id) | EntityRef::Weapon(id) => format!("{id}.json"),
        };
        self.base_dir.join(file_name)
    }

    /// Load `kind`, addressed by `identifier` for detail kinds.
    ///
    /// Identifiers outside the safe class are reported as
    /// [`LoadError::NotFound`] before any file access.
    pub fn load(&self, kind: EntityKind, identifier: Option<&str>) -> LoadResult<Value> {
        let entity = EntityRef::from_parts(kind, identifier)?;
        self.load_entity(&entity)
    }

    /// Load an already-resolved entity reference.
    pub fn load_entity(&self, entity: &EntityRef) -> LoadResult<Value> {
        let path = self.resolve(entity);
        tracing::debug!(%entity, path = %path.display(), "loading record");

        if !path.exists() {
            return Err(LoadError::NotFound {
                target: path.display().to_string(),
            });
        }
        self.ensure_contained(&path)?;

        let bytes = std::fs::read(&path).map_err(|source| LoadError::ReadFailure {
            path: path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|source| LoadError::ParseFailure { path, source })?;

        Ok(normalize(value))
    }

    /// Reject targets that resolve (through symlinks) outside the data directory.
    fn ensure_contained(&self, path: &Path) -> LoadResult<()> {
        let canonical = |p: &Path| {
            p.canonicalize().map_err(|source| LoadError::ReadFailure {
                path: p.to_path_buf(),
                source,
            })
        };
        let base = canonical(&self.base_dir)?;
        let target = canonical(path)?;
        if target.starts_with(&base) {
            Ok(())
        } else {
            tracing::warn!(
                path = %path.display(),
                resolved = %target.display(),
                "record resolves outside data directory"
            );
            Err(LoadError::NotFound {
                target: path.display().to_string(),
            })
        }
    }
}
