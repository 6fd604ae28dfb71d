//! Error types for the census transformation pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - reading and parsing input files
//! - [`TransformError`] - wide-to-tidy reshaping errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. Every error is fatal:
//! the pipeline never skips a bad row.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading and parsing a CSV input.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input file absent, unreadable, or without a header row.
    #[error("Missing input '{}': {reason}", path.display())]
    MissingInput { path: PathBuf, reason: String },

    /// Bytes could not be decoded to text.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// Invalid CSV structure.
    #[error("Invalid CSV format at line {line}: {message}")]
    Parse { line: u64, message: String },
}

impl CsvError {
    pub fn missing_input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MissingInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        CsvError::Parse {
            line,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while reshaping wide records into tidy records.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A required column is absent from the header.
    #[error("Missing source column: {column}")]
    MissingColumn { column: String },

    /// A numeric field is missing or not an unsigned integer.
    #[error("Malformed value for field '{field}' at line {line}: '{value}' is not a non-negative integer")]
    MalformedInput {
        field: String,
        line: u64,
        value: String,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::run_cso`] and
/// [`crate::transform::run_nisra`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(String),

    /// Output file could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a failure, independent of where it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    MissingColumn,
    MalformedInput,
    Other,
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Csv(CsvError::MissingInput { .. }) => ErrorKind::MissingInput,
            PipelineError::Transform(TransformError::MissingColumn { .. }) => {
                ErrorKind::MissingColumn
            }
            PipelineError::Transform(TransformError::MalformedInput { .. }) => {
                ErrorKind::MalformedInput
            }
            _ => ErrorKind::Other,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::missing_input("nisra_2011.csv", "file is empty");
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("nisra_2011.csv"));
        assert_eq!(pipeline_err.kind(), ErrorKind::MissingInput);

        let transform_err = TransformError::MissingColumn {
            column: "2016_Irish_Speakers".into(),
        };
        let pipeline_err: PipelineError = transform_err.into();
        assert!(pipeline_err.to_string().contains("2016_Irish_Speakers"));
        assert_eq!(pipeline_err.kind(), ErrorKind::MissingColumn);
    }

    #[test]
    fn test_malformed_input_format() {
        let err = TransformError::MalformedInput {
            field: "2011_Total".into(),
            line: 4,
            value: "n/a".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2011_Total"));
        assert!(msg.contains("line 4"));
        assert!(msg.contains("'n/a'"));

        let pipeline_err: PipelineError = err.into();
        assert_eq!(pipeline_err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_parse_error_is_other_kind() {
        let err: PipelineError = CsvError::Parse {
            line: 3,
            message: "found record with 2 fields".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(err.to_string().contains("line 3"));
    }
}
