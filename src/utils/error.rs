//! Error types for the asset optimizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors for input paths and settings.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
}

/// Main error type for the optimizer.
///
/// Everything that can go wrong while handling one file ends up here before
/// being folded into a [`FileOutcome`](crate::core::FileOutcome).
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Path or settings validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The source could not be decoded as an image
    #[error("Decode error: {0}")]
    Decode(String),

    /// JPEG encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Image cannot be represented in the output format
    #[error("Format error: {0}")]
    Format(String),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

impl OptimizerError {
    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    /// Returns `true` when the error only says the input path is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Validation(ValidationError::Path(PathError::NotFound(_)))
        )
    }
}

impl ValidationError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to OptimizerError
impl From<PathError> for OptimizerError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

impl From<image::ImageError> for OptimizerError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::IO(e.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<jpeg_encoder::EncodingError> for OptimizerError {
    fn from(err: jpeg_encoder::EncodingError) -> Self {
        Self::Encode(err.to_string())
    }
}
