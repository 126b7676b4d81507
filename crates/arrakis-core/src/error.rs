//! Error types and exit codes for arrakis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown location, invalid map file, etc.)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, invalid map (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during arrakis operations
#[derive(Error, Debug)]
pub enum ArrakisError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("location not found: {name}")]
    LocationNotFound { name: String },

    #[error("invalid map: {reason}")]
    InvalidMap { reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl ArrakisError {
    /// Create an error for a location missing from the map
    pub fn location_not_found(name: impl Into<String>) -> Self {
        ArrakisError::LocationNotFound { name: name.into() }
    }

    /// Create an error for a map that violates a construction invariant
    pub fn invalid_map(reason: impl std::fmt::Display) -> Self {
        ArrakisError::InvalidMap {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ArrakisError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        ArrakisError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        ArrakisError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArrakisError::UnknownFormat(_)
            | ArrakisError::DuplicateFormat
            | ArrakisError::UsageError(_)
            | ArrakisError::InvalidValue { .. } => ExitCode::Usage,

            ArrakisError::LocationNotFound { .. }
            | ArrakisError::InvalidMap { .. }
            | ArrakisError::AlreadyExists { .. }
            | ArrakisError::NotFound { .. } => ExitCode::Data,

            ArrakisError::Io(_)
            | ArrakisError::Json(_)
            | ArrakisError::Toml(_)
            | ArrakisError::TomlSerialize(_)
            | ArrakisError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ArrakisError::UnknownFormat(_) => "unknown_format",
            ArrakisError::DuplicateFormat => "duplicate_format",
            ArrakisError::UsageError(_) => "usage_error",
            ArrakisError::InvalidValue { .. } => "invalid_value",
            ArrakisError::LocationNotFound { .. } => "location_not_found",
            ArrakisError::InvalidMap { .. } => "invalid_map",
            ArrakisError::AlreadyExists { .. } => "already_exists",
            ArrakisError::NotFound { .. } => "not_found",
            ArrakisError::Io(_) => "io_error",
            ArrakisError::Json(_) => "json_error",
            ArrakisError::Toml(_) | ArrakisError::TomlSerialize(_) => "toml_error",
            ArrakisError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for arrakis operations
pub type Result<T> = std::result::Result<T, ArrakisError>;
