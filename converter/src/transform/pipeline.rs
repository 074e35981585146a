//! High-level conversion API.
//!
//! Combines reading, converting and rendering for both directions, either
//! in memory or from a source file into a destination directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use intentcsv::{convert_file, Configuration, Destination, Direction};
//! use std::path::Path;
//!
//! let destination = Destination::new(".", Direction::CsvToYaml.default_file_name());
//! let summary = convert_file(
//!     Path::new("intents.csv"),
//!     Direction::CsvToYaml,
//!     &Configuration::default(),
//!     &destination,
//!     None,
//! )?;
//! println!("Wrote {} intents", summary.groups);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Configuration;
use crate::document::{parse_document, render_document};
use crate::error::{PipelineError, PipelineResult};
use crate::parser::{parse_bytes_auto, table_to_csv};
use super::flatten::document_to_table;
use super::grouper::table_to_document;

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// CSV rows to a grouped YAML document.
    CsvToYaml,
    /// YAML document to CSV rows.
    YamlToCsv,
}

impl Direction {
    /// File name used when none is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Direction::CsvToYaml => "output.yml",
            Direction::YamlToCsv => "output.csv",
        }
    }
}

/// Where converted output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub dir: PathBuf,
    pub file_name: String,
}

impl Destination {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// What a conversion produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub direction: Direction,
    /// Number of text/label rows on the CSV side
    pub rows: usize,
    /// Number of label groups on the document side
    pub groups: usize,
    /// File written, if any
    pub destination: Option<PathBuf>,
    /// Detected CSV encoding (CSV sources only)
    pub encoding: Option<String>,
    /// Detected or given CSV delimiter (CSV sources only)
    pub delimiter: Option<char>,
}

/// Convert CSV bytes into Rasa YAML text.
///
/// The delimiter is detected unless given.
pub fn csv_bytes_to_yaml(
    bytes: &[u8],
    config: &Configuration,
    delimiter: Option<char>,
) -> PipelineResult<(String, ConversionSummary)> {
    let parsed = parse_bytes_auto(bytes, delimiter)?;
    let document = table_to_document(&parsed.table, config)?;
    let yaml = render_document(&document, config);

    let summary = ConversionSummary {
        direction: Direction::CsvToYaml,
        rows: parsed.table.len(),
        groups: document.groups.len(),
        destination: None,
        encoding: Some(parsed.encoding),
        delimiter: Some(parsed.delimiter),
    };
    Ok((yaml, summary))
}

/// Convert Rasa YAML text into CSV text with a `[text, label]` header.
pub fn yaml_to_csv_string(
    text: &str,
    config: &Configuration,
) -> PipelineResult<(String, ConversionSummary)> {
    let document = parse_document(text, config)?;
    let table = document_to_table(&document, config);
    let csv = table_to_csv(&table)?;

    let summary = ConversionSummary {
        direction: Direction::YamlToCsv,
        rows: table.len(),
        groups: document.groups.len(),
        destination: None,
        encoding: None,
        delimiter: None,
    };
    Ok((csv, summary))
}

/// Convert `source` and write the result to `destination`.
///
/// The destination directory must exist. Nothing is written unless the
/// whole conversion succeeds.
pub fn convert_file(
    source: &Path,
    direction: Direction,
    config: &Configuration,
    destination: &Destination,
    delimiter: Option<char>,
) -> PipelineResult<ConversionSummary> {
    info!(source = %source.display(), ?direction, "converting");

    let (output, mut summary) = match direction {
        Direction::CsvToYaml => {
            let bytes = fs::read(source)?;
            let (yaml, summary) = csv_bytes_to_yaml(&bytes, config, delimiter)?;
            if summary.rows == 0 {
                return Err(PipelineError::EmptyInput(source.display().to_string()));
            }
            (yaml, summary)
        }
        Direction::YamlToCsv => {
            let text = fs::read_to_string(source)?;
            yaml_to_csv_string(&text, config)?
        }
    };

    let path = destination.path();
    fs::write(&path, output)?;
    info!(destination = %path.display(), rows = summary.rows, groups = summary.groups, "wrote output");

    summary.destination = Some(path);
    Ok(summary)
}
