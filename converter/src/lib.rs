//! # intentcsv - CSV ⇄ Rasa NLU training data
//!
//! Converts intent-classification training data between a flat CSV file
//! (one text/intent pair per row) and a Rasa NLU YAML document (examples
//! grouped under each intent).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Grouper   │────▶│  Rasa YAML  │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (by intent) │     │  (nlu list) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                                           │
//!        │            ┌─────────────┐     ┌─────────────┐            │
//!        └────────────│   Flatten   │◀────│  Document   │◀───────────┘
//!                     │  (per row)  │     │ (+splitter) │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use intentcsv::{table_to_document, Configuration, Table};
//!
//! let mut table = Table::new(["text", "intent"]);
//! table.push_row(["hello", "greet"]).unwrap();
//! table.push_row(["bye", "farewell"]).unwrap();
//!
//! let document = table_to_document(&table, &Configuration::default()).unwrap();
//! assert_eq!(document.groups.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Table, Row, Document, LabelGroup
//! - [`config`] - Field mapping and format settings
//! - [`parser`] - CSV reading with auto-detection, CSV writing
//! - [`document`] - Rasa YAML reading and rendering
//! - [`transform`] - Grouping, flattening, splitting, and pipeline

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Formats
pub mod document;
pub mod parser;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError,
    ConvertResult,
    CsvError,
    DocumentError,
    PipelineError,
    PipelineResult,
};

// =============================================================================
// Re-exports - Models & Configuration
// =============================================================================

pub use config::{Configuration, ExampleBlock};
pub use models::{Document, LabelGroup, Row, Table};

// =============================================================================
// Re-exports - Core conversions
// =============================================================================

pub use transform::{
    document_to_table,
    split_examples,
    table_to_document,
    DEFAULT_EXAMPLE_DELIMITER,
};

// =============================================================================
// Re-exports - Formats
// =============================================================================

pub use document::{document_from_value, parse_document, render_document};
pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_bytes_auto,
    parse_csv,
    parse_csv_file_auto,
    table_to_csv,
    ParseResult,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    convert_file,
    csv_bytes_to_yaml,
    yaml_to_csv_string,
    ConversionSummary,
    Destination,
    Direction,
};
