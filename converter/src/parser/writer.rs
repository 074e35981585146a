//! Serialize a [`Table`] to CSV text.

use crate::error::{CsvError, CsvResult};
use crate::models::Table;

/// Write a header row followed by every row, `\n`-terminated.
///
/// Values are quoted only when they need to be.
pub fn table_to_csv(table: &Table) -> CsvResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.values())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::new(0, format!("Cannot flush CSV output: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| CsvError::new(0, format!("CSV output is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    #[test]
    fn test_header_and_rows() {
        let mut table = Table::new(["text", "intent"]);
        table.push_row(["hello", "greet"]).unwrap();
        table.push_row(["bye", "farewell"]).unwrap();

        assert_eq!(table_to_csv(&table).unwrap(), "text,intent\nhello,greet\nbye,farewell\n");
    }

    #[test]
    fn test_header_only_for_empty_table() {
        let table = Table::new(["text", "intent"]);
        assert_eq!(table_to_csv(&table).unwrap(), "text,intent\n");
    }

    #[test]
    fn test_special_characters_quoted() {
        let mut table = Table::new(["text", "intent"]);
        table.push_row(["hello, there", "greet"]).unwrap();
        table.push_row(["say \"hi\"", "greet"]).unwrap();

        let csv = table_to_csv(&table).unwrap();
        assert_eq!(csv, "text,intent\n\"hello, there\",greet\n\"say \"\"hi\"\"\",greet\n");
        assert_eq!(parse_csv(&csv, ',').unwrap(), table);
    }
}
