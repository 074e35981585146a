//! CSV reading with encoding and delimiter auto-detection.
//!
//! Rows are loaded into a [`Table`]; the first record supplies the field
//! names. Writing a table back to CSV lives in [`writer`].

pub mod writer;

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CsvError, CsvResult};
use crate::models::Table;

pub use writer::table_to_csv;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of parsing with metadata
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// Parsed rows
    pub table: Table,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 (with or without a byte order mark) is always reported as
/// `utf-8`; chardet is only asked about bytes that are not.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).into_owned(),
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.into_owned(),
            None => {
                warn!(encoding = other, "unknown encoding, falling back to lossy UTF-8");
                String::from_utf8_lossy(bytes).into_owned()
            }
        },
    }
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Falls back to a comma when none of the candidates appear.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text into a [`Table`] with an explicit delimiter.
///
/// Blank lines are skipped. Short rows are padded with empty values and
/// long rows are truncated so every row matches the header width.
///
/// # Example
/// ```
/// use intentcsv::parser::parse_csv;
///
/// let table = parse_csv("text,intent\nhello,greet\nbye,farewell", ',').unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.headers(), ["text", "intent"]);
/// ```
pub fn parse_csv(content: &str, delimiter: char) -> CsvResult<Table> {
    if !delimiter.is_ascii() {
        return Err(CsvError::new(0, format!("Delimiter '{}' is not a single-byte character", delimiter)));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let header_record = records
        .next()
        .ok_or_else(|| CsvError::new(1, "Empty CSV file"))??;

    let headers: Vec<String> = header_record.iter().map(|h| h.trim().to_string()).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::new(1, "No headers found"));
    }

    let mut table = Table::new(headers.iter().map(String::as_str));

    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        if record.len() != headers.len() {
            debug!(line, found = record.len(), expected = headers.len(), "ragged row");
        }

        let values = (0..headers.len()).map(|i| record.get(i).unwrap_or(""));
        table
            .push_row(values)
            .map_err(|e| CsvError::new(line, e.to_string()))?;
    }

    Ok(table)
}

/// Parse CSV bytes, detecting the encoding and (unless given) the delimiter.
pub fn parse_bytes_auto(bytes: &[u8], delimiter: Option<char>) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    debug!(%encoding, delimiter = %delimiter.escape_default(), "decoded CSV source");

    let table = parse_csv(&content, delimiter)?;

    Ok(ParseResult {
        table,
        encoding,
        delimiter,
    })
}

/// Parse a CSV file, detecting the encoding and (unless given) the delimiter.
///
/// # Example
/// ```ignore
/// let result = parse_csv_file_auto("/path/to/intents.csv", None)?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Rows: {}", result.table.len());
/// ```
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P, delimiter: Option<char>) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| CsvError::new(0, format!("Cannot read file '{}': {}", path.display(), e)))?;

    parse_bytes_auto(&bytes, delimiter)
}
