//! Mapping of core lookup failures onto HTTP responses.
//!
//! The core reports *what* failed; this module decides the status code and
//! the user-facing message, which depends on which endpoint was asked. Paths
//! and parser diagnostics are logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use codex_core::{EntityKind, LoadError};
use serde_json::json;
use tracing::{error, warn};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{kind} lookup failed: {source}")]
    Load {
        kind: EntityKind,
        #[source]
        source: LoadError,
    },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("no route")]
    NoRoute,
}

impl ApiError {
    pub fn load(kind: EntityKind, source: LoadError) -> Self {
        ApiError::Load { kind, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Load { source, .. } if source.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::NoRoute => StatusCode::NOT_FOUND,
            ApiError::Load { .. } | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `{"error": ...}` response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Load { kind, source } => match (kind, source) {
                (EntityKind::CharacterIndex, LoadError::NotFound { .. }) => {
                    "Character ID file not found"
                }
                (EntityKind::CharacterIndex, LoadError::ParseFailure { .. }) => {
                    "Error decoding Character ID JSON"
                }
                (EntityKind::CharacterIndex, LoadError::ReadFailure { .. }) => {
                    "Error reading Character ID file"
                }
                (EntityKind::WeaponIndex, LoadError::NotFound { .. }) => "Weapon ID file not found",
                (EntityKind::WeaponIndex, LoadError::ParseFailure { .. }) => {
                    "Error decoding Weapon ID JSON"
                }
                (EntityKind::WeaponIndex, LoadError::ReadFailure { .. }) => {
                    "Error reading Weapon ID file"
                }
                (EntityKind::Character, LoadError::NotFound { .. }) => "Character not found",
                (EntityKind::Weapon, LoadError::NotFound { .. }) => "Weapon not found",
                (EntityKind::Character | EntityKind::Weapon, LoadError::ParseFailure { .. }) => {
                    "Error decoding JSON file"
                }
                (EntityKind::Character | EntityKind::Weapon, LoadError::ReadFailure { .. }) => {
                    "Unexpected error while reading file"
                }
            },
            ApiError::Internal(_) => "Internal server error",
            ApiError::NoRoute => "Not found",
        }
    }

    /// Short stable tag for structured logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Load { source, .. } => source.error_type(),
            ApiError::Internal(_) => "internal_error",
            ApiError::NoRoute => "no_route",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = self.error_type();

        match &self {
            ApiError::Load { kind, source } if status == StatusCode::NOT_FOUND => {
                warn!(%kind, error_type, details = %source, "record not found");
            }
            ApiError::Load { kind, source } => {
                error!(%kind, error_type, details = %source, "record lookup failed");
            }
            ApiError::Internal(msg) => error!(error_type, details = %msg, "internal error"),
            ApiError::NoRoute => {}
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
