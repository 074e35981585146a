//! Transformation module.
//!
//! - Grouper: flat rows to a grouped document
//! - Flatten: grouped document back to flat rows
//! - Splitter: bundled example strings to individual examples
//! - Pipeline: end-to-end conversions with I/O

pub mod flatten;
pub mod grouper;
pub mod pipeline;
pub mod splitter;

pub use flatten::document_to_table;
pub use grouper::table_to_document;
pub use pipeline::*;
pub use splitter::{split_examples, DEFAULT_EXAMPLE_DELIMITER};
