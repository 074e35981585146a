//! Group flat text/label rows into a training document.
//!
//! # Architecture
//!
//! ```text
//! CSV Input (flat rows)          →  Document (grouped)
//! ┌────────────────────────┐       ┌─────────────────────────┐
//! │ text: hello, greet     │       │ intent: greet           │
//! │ text: hi,    greet     │  →    │ examples: [hello, hi]   │
//! │ text: bye,   farewell  │       ├─────────────────────────┤
//! └────────────────────────┘       │ intent: farewell        │
//!                                  │ examples: [bye]         │
//!                                  └─────────────────────────┘
//! ```
//!
//! Groups appear in the order their label is first seen. Examples keep
//! row order and duplicates are kept.

use std::collections::HashMap;

use tracing::debug;

use crate::config::Configuration;
use crate::error::ConvertResult;
use crate::models::{Document, LabelGroup, Table};

/// Group `table` rows by `config.label_field` into a [`Document`].
///
/// Fails with [`crate::error::ConvertError::MissingField`] when the table
/// lacks the label or text column.
pub fn table_to_document(table: &Table, config: &Configuration) -> ConvertResult<Document> {
    let label_idx = table.column_index(&config.label_field)?;
    let text_idx = table.column_index(&config.text_field)?;

    let mut builder = DocumentBuilder::new(&config.format_version);
    for row in table.rows() {
        let label = row.get(label_idx).unwrap_or("");
        let text = row.get(text_idx).unwrap_or("");
        builder.add(label, text);
    }

    let document = builder.build();
    debug!(
        rows = table.len(),
        groups = document.groups.len(),
        "grouped rows by label"
    );
    Ok(document)
}

/// Accumulates examples per label while remembering first-seen order.
struct DocumentBuilder {
    version: String,
    groups: Vec<LabelGroup>,
    index: HashMap<String, usize>,
}

impl DocumentBuilder {
    fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, label: &str, text: &str) {
        let slot = match self.index.get(label) {
            Some(&slot) => slot,
            None => {
                self.groups.push(LabelGroup::new(label));
                self.index.insert(label.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].examples.push(text.to_string());
    }

    fn build(self) -> Document {
        Document {
            version: self.version,
            groups: self.groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    fn table(rows: &[(&str, &str)]) -> Table {
        let mut table = Table::new(["text", "intent"]);
        for (text, label) in rows {
            table.push_row([*text, *label]).unwrap();
        }
        table
    }

    #[test]
    fn test_groups_by_label() {
        let rows = table(&[("hello", "greet"), ("hi", "greet"), ("bye", "farewell")]);
        let doc = table_to_document(&rows, &Configuration::default()).unwrap();

        assert_eq!(doc.version, "3.0");
        assert_eq!(
            doc.groups,
            vec![
                LabelGroup::new("greet").with_examples(["hello", "hi"]),
                LabelGroup::new("farewell").with_examples(["bye"]),
            ]
        );
    }

    #[test]
    fn test_first_seen_label_order() {
        let rows = table(&[("1", "b"), ("2", "a"), ("3", "b"), ("4", "c")]);
        let doc = table_to_document(&rows, &Configuration::default()).unwrap();

        let labels: Vec<&str> = doc.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(doc.groups[0].examples, vec!["1", "3"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let rows = table(&[("hi", "greet"), ("hi", "greet")]);
        let doc = table_to_document(&rows, &Configuration::default()).unwrap();
        assert_eq!(doc.groups[0].examples, vec!["hi", "hi"]);
    }

    #[test]
    fn test_example_count_matches_row_count() {
        let rows = table(&[("a", "x"), ("b", "y"), ("c", "x"), ("d", "z"), ("e", "y")]);
        let doc = table_to_document(&rows, &Configuration::default()).unwrap();
        assert_eq!(doc.example_count(), rows.len());
    }

    #[test]
    fn test_custom_columns_and_version() {
        let mut rows = Table::new(["id", "utterance", "label"]);
        rows.push_row(["1", "open the door", "open"]).unwrap();
        let config = Configuration::default()
            .with_label_field("label")
            .with_text_field("utterance")
            .with_format_version("2.0");

        let doc = table_to_document(&rows, &config).unwrap();
        assert_eq!(doc.version, "2.0");
        assert_eq!(doc.groups[0].label, "open");
        assert_eq!(doc.groups[0].examples, vec!["open the door"]);
    }

    #[test]
    fn test_missing_text_column() {
        let mut rows = Table::new(["utterance", "intent"]);
        rows.push_row(["hello", "greet"]).unwrap();

        let err = table_to_document(&rows, &Configuration::default()).unwrap_err();
        assert_eq!(err, ConvertError::MissingField("text".to_string()));
    }

    #[test]
    fn test_missing_label_column() {
        let rows = Table::new(["text", "category"]);
        let err = table_to_document(&rows, &Configuration::default()).unwrap_err();
        assert_eq!(err, ConvertError::MissingField("intent".to_string()));
    }

    #[test]
    fn test_empty_table_gives_empty_document() {
        let doc = table_to_document(&table(&[]), &Configuration::default()).unwrap();
        assert!(doc.groups.is_empty());
    }
}
