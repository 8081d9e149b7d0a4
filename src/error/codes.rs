//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Validation errors
//! - 2xx: Category errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `UnknownCategory` -> E201).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Validation errors (1xx)
    // ========================================
    /// E101: A required import field is missing or malformed
    ValidationFailed,

    // ========================================
    // Category errors (2xx)
    // ========================================
    /// E201: Category label is not part of the vocabulary
    UnknownCategory,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Creating the target directory or copying a file failed
    FilesystemError,
    /// E602: Writing the generated index document failed
    MetadataWriteFailed,
    /// E603: Front matter or output could not be (de)serialized
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal failure
    InternalError,
    /// E902: Requested resource does not exist
    NotFound,
    /// E903: Generic IO failure
    IoError,
}

impl ErrorCode {
    /// Get the numeric code.
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::ValidationFailed => 101,
            Self::UnknownCategory => 201,
            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,
            Self::FilesystemError => 601,
            Self::MetadataWriteFailed => 602,
            Self::SerializationError => 603,
            Self::InternalError => 901,
            Self::NotFound => 902,
            Self::IoError => 903,
        }
    }

    /// Get the code as a string (e.g., "E201").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Static recovery hint.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Check the import arguments: source folder, category, slug and title are required",
            Self::UnknownCategory => "Run `aimp categories` to see the accepted category labels and codes",
            Self::ConfigInvalid => "Run `aimp config` to see current values. Check TOML syntax in config file",
            Self::ConfigMissingRequired => "Set the value in config.toml or with the matching AIMP_* environment variable",
            Self::FilesystemError => "Check permissions and free space under the content root. The target may be partially populated; re-running the import is safe",
            Self::MetadataWriteFailed => "Check write permissions on the target directory, then re-run the import",
            Self::SerializationError => "The data format may be corrupted. Check the front matter for invalid YAML",
            Self::InternalError => "An unexpected error occurred. Please report this issue with full error output",
            Self::NotFound => "The requested resource was not found. Check the path or identifier",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Whether the user can fix the cause and retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InternalError)
    }

    /// Category name used in structured output.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "validation",
            2 => "category",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::ValidationFailed,
            Self::UnknownCategory,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::FilesystemError,
            Self::MetadataWriteFailed,
            Self::SerializationError,
            Self::InternalError,
            Self::NotFound,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
