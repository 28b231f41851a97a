//! CLI argument definitions for the codex binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use codex_core::EntityKind;

/// Read-only HTTP server for character and weapon records
#[derive(Parser, Debug)]
#[command(name = "codex", version)]
#[command(about = "Serve normalized character and weapon records over HTTP")]
pub struct Cli {
    /// Config file (TOML). Defaults to ~/.config/codex/config.toml if present.
    #[arg(long, global = true, env = "CODEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the JSON records.
    #[arg(short = 'D', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Print one normalized record to stdout
    Show(ShowArgs),
    /// Load every indexed record and report unreadable or malformed files
    Check,
}

/// Arguments for the serve command
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Which record family to read
    pub kind: KindArg,

    /// Record identifier (character and weapon only)
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Character,
    Weapon,
    CharacterIndex,
    WeaponIndex,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Character => EntityKind::Character,
            KindArg::Weapon => EntityKind::Weapon,
            KindArg::CharacterIndex => EntityKind::CharacterIndex,
            KindArg::WeaponIndex => EntityKind::WeaponIndex,
        }
    }
}
