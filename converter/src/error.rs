//! Error types for the intentcsv conversion pipeline.
//!
//! - [`ConvertError`] - Core conversion errors (missing fields, bad structure)
//! - [`CsvError`] - CSV reading/writing errors with the offending line
//! - [`DocumentError`] - YAML document errors
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Core Conversion Errors
// =============================================================================

/// Errors raised by the table/document conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A required column or document key is absent.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The document does not have the expected top-level structure.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A row does not have one value per header.
    #[error("Row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// CSV Errors
// =============================================================================

/// CSV error with the source line it was raised on (0 when unknown).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}: {message}")]
pub struct CsvError {
    pub line: usize,
    pub message: String,
}

impl CsvError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(0);
        CsvError::new(line, err.to_string())
    }
}

// =============================================================================
// Document Errors
// =============================================================================

/// Errors while reading a YAML training document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not valid YAML.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML is valid but does not describe a document.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Document error.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Conversion error.
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// File system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to convert.
    #[error("No data to convert in {0}")]
    EmptyInput(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for core conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
