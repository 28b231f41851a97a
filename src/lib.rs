//! codex: read-only HTTP server for character and weapon records.
//!
//! Records are static JSON files in one data directory. Every response is
//! the file's content with object keys rewritten into deterministic
//! (byte-wise lexicographic) order, so two deployments serving the same files
//! always produce byte-identical bodies.
//!
//! # Architecture
//!
//! ```text
//! cli ──► config ──► codex-server (axum) ──► codex-core
//!                                              RecordLoader ──► Normalizer
//! ```
//!
//! The binary is a thin shell over [`commands::run`]; integration tests drive
//! `codex_core` and `codex_server` directly.

pub mod cli;
pub mod commands;

pub use codex_core::{normalize, EntityKind, LoadError, RecordLoader};
pub use codex_server::{router, AppState};
