use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for scaffold operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Target root already exists; nothing was written.
    #[error("Directory already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    /// Target root is missing or is not a directory.
    #[error("Directory not found: {}", path.display())]
    TargetNotFound { path: PathBuf },

    /// Directory creation failed.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// File write failed mid-run. Files written before this one are left in place.
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Catalog path is not a clean relative path.
    #[error("Invalid catalog path '{path}': {reason}")]
    InvalidCatalogPath { path: String, reason: String },

    /// Catalog path appears more than once.
    #[error("Duplicate catalog path '{0}'")]
    DuplicateCatalogPath(String),

    /// A catalog file sits where another entry needs a directory.
    #[error("Catalog entry '{file}' collides with the parent directory of '{nested}'")]
    CatalogConflict { file: String, nested: String },

    /// Serialization error.
    #[error("Failed to serialize {what}: {details}")]
    SerializeError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// The closest `io::ErrorKind`, for callers that classify failures like I/O errors.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::CreateDir { source, .. } | AppError::Write { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidCatalogPath { .. }
            | AppError::DuplicateCatalogPath(_)
            | AppError::CatalogConflict { .. } => io::ErrorKind::InvalidInput,
            AppError::TargetExists { .. } => io::ErrorKind::AlreadyExists,
            AppError::TargetNotFound { .. } => io::ErrorKind::NotFound,
            AppError::SerializeError { .. } => io::ErrorKind::Other,
        }
    }
}
