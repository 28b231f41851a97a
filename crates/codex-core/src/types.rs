//! Core types for codex-core.
//!
//! An [`EntityRef`] names exactly one backing file: either one of the two
//! index files or a single character/weapon record addressed by an
//! [`Identifier`]. Identifiers are validated on construction, so any
//! `EntityRef` that exists can be turned into a path without further checks.

use crate::error::LoadError;

/// Longest identifier accepted, in bytes.
pub const MAX_IDENTIFIER_LEN: usize = 128;

/// Which family of backing file a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Character,
    Weapon,
    CharacterIndex,
    WeaponIndex,
}

impl EntityKind {
    /// Whether this kind addresses a single record (and so needs an identifier).
    pub fn is_detail(self) -> bool {
        matches!(self, EntityKind::Character | EntityKind::Weapon)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Character => write!(f, "character"),
            EntityKind::Weapon => write!(f, "weapon"),
            EntityKind::CharacterIndex => write!(f, "character-index"),
            EntityKind::WeaponIndex => write!(f, "weapon-index"),
        }
    }
}

/// A caller-supplied record identifier restricted to a filename-safe class.
///
/// Accepted: 1 to [`MAX_IDENTIFIER_LEN`] bytes of ASCII letters, digits, `_`
/// and `-`. Anything else (path separators, dots, whitespace, non-ASCII) is
/// rejected, so an identifier can never step outside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `raw`, returning `None` if it falls outside the safe class.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.len() > MAX_IDENTIFIER_LEN {
            return None;
        }
        raw.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
            .then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved (kind, identifier) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Character(Identifier),
    Weapon(Identifier),
    CharacterIndex,
    WeaponIndex,
}

impl EntityRef {
    /// Build a reference from the loose `(kind, identifier)` form.
    ///
    /// Index kinds ignore `identifier`. Detail kinds require one that passes
    /// [`Identifier::parse`]; a missing or rejected identifier is reported as
    /// [`LoadError::NotFound`], the same as a file that does not exist.
    pub fn from_parts(kind: EntityKind, identifier: Option<&str>) -> Result<Self, LoadError> {
        match kind {
            EntityKind::CharacterIndex => Ok(EntityRef::CharacterIndex),
            EntityKind::WeaponIndex => Ok(EntityRef::WeaponIndex),
            EntityKind::Character | EntityKind::Weapon => {
                let raw = identifier.unwrap_or_default();
                let Some(id) = Identifier::parse(raw) else {
                    tracing::warn!(%kind, identifier = ?raw, "rejected identifier");
                    return Err(LoadError::NotFound {
                        target: format!("{kind} {raw:?}"),
                    });
                };
                Ok(if kind == EntityKind::Character {
                    EntityRef::Character(id)
                } else {
                    EntityRef::Weapon(id)
                })
            }
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Character(_) => EntityKind::Character,
            EntityRef::Weapon(_) => EntityKind::Weapon,
            EntityRef::CharacterIndex => EntityKind::CharacterIndex,
            EntityRef::WeaponIndex => EntityKind::WeaponIndex,
        }
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            EntityRef::Character(id) | EntityRef::Weapon(id) => Some(id),
            EntityRef::CharacterIndex | EntityRef::WeaponIndex => None,
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.identifier() {
            Some(id) => write!(f, "{} {}", self.kind(), id),
            None => write!(f, "{}", self.kind()),
        }
    }
}
