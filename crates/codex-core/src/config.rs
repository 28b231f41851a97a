//! Configuration types for codex.
//!
//! [`Config::load`] layers, lowest precedence first: the embedded defaults,
//! a TOML file (`--config PATH`, else `~/.config/codex/config.toml` if
//! present) and `CODEX_*` environment variables (`CODEX_SERVER__PORT=8080`).
//! CLI flags are applied on top by the binary. [`Config::defaults`] returns
//! the embedded defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::loader::RecordLoader;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 5000

[data]
dir = "json"

[cors]
allow_any_origin = true

[log]
filter = "info"
"#;

const ENV_PREFIX: &str = "CODEX";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("data directory {} does not exist or is not a directory", .0.display())]
    MissingDataDir(PathBuf),
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[data]` section: where the JSON records live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf { PathBuf::from("json") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// `[cors]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allow_any_origin")]
    pub allow_any_origin: bool,
}

fn default_allow_any_origin() -> bool { true }

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: default_allow_any_origin(),
        }
    }
}

/// `[log]` section. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "info".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// An explicit `path` must exist; the per-user default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(path, None)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// `env` replaces the process environment when given.
    fn build(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(user_config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Check the settings that would otherwise only fail on first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.data.dir.is_dir() {
            return Err(ConfigError::MissingDataDir(self.data.dir.clone()));
        }
        Ok(())
    }

    /// Build the record loader for the configured data directory.
    pub fn loader(&self) -> RecordLoader {
        RecordLoader::new(&self.data.dir)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn user_config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("codex")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
