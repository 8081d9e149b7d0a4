//! Error handling for aimp.
//!
//! This module provides:
//! - [`AimpError`]: The main error enum for all import operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context
//! - Suggestion helpers for context-aware error recovery hints

mod codes;
mod suggestions;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for aimp operations.
#[derive(Error, Debug)]
pub enum AimpError {
    /// A required import field is missing or malformed. Nothing has been
    /// written when this is returned.
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Unknown category: {label}")]
    UnknownCategory { label: String },

    /// Directory creation or file copy failed. The target may already be
    /// partially populated.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write metadata document {}: {source}", .path.display())]
    MetadataWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AimpError {
    /// Shorthand for a [`AimpError::Validation`] error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`AimpError::Filesystem`] error.
    pub fn filesystem(
        action: impl Into<String>,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::Filesystem {
            action: action.into(),
            path: path.into(),
            source,
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValidationFailed,
            Self::UnknownCategory { .. } => ErrorCode::UnknownCategory,
            Self::Filesystem { .. } => ErrorCode::FilesystemError,
            Self::MetadataWrite { .. } => ErrorCode::MetadataWriteFailed,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Yaml(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Validation { field, reason } => {
                Some(serde_json::json!({ "field": field, "reason": reason }))
            }
            Self::UnknownCategory { label } => Some(serde_json::json!({ "label": label })),
            Self::Filesystem { action, path, .. } => Some(serde_json::json!({
                "action": action,
                "path": path.display().to_string(),
            })),
            Self::MetadataWrite { path, .. } => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Printed in machine output mode so scripts driving the importer can react
/// to the failure without parsing prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "UNKNOWN_CATEGORY")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 201)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "validation", "storage")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from an [`AimpError`].
    #[must_use]
    pub fn from_error(err: &AimpError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        // Regenerate suggestion with new context
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&AimpError> for StructuredError {
    fn from(err: &AimpError) -> Self {
        Self::from_error(err)
    }
}

/// Result type alias using [`AimpError`].
pub type Result<T> = std::result::Result<T, AimpError>;
