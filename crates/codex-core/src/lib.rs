//! codex-core: record lookup core for codex.
//!
//! This crate holds everything the HTTP surface needs that is not HTTP:
//! the JSON normalizer, the file-backed record loader, the catalog accessor
//! that enumerates characters, and the configuration types.
//!
//! # Architecture
//!
//! ```text
//! EntityRef ──► RecordLoader ──► read ──► parse ──► Normalizer ──► Value
//!                    ▲
//!      Catalog ──────┘ (one load per indexed identifier)
//! ```
//!
//! Nothing here holds shared mutable state. A [`RecordLoader`] is a base
//! directory and nothing more, so it can be cloned into any number of
//! concurrent request handlers.

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod normalizer;
pub mod types;

pub use catalog::{
    check_catalog, index_identifiers, list_all_characters, CatalogReport, ListingError,
};
pub use error::LoadError;
pub use loader::RecordLoader;
pub use normalizer::{is_normalized, normalize};
pub use types::{EntityKind, EntityRef, Identifier};
