//! Domain models for intent training data.
//!
//! - [`Table`] / [`Row`] - Flat representation, one text+label pair per row
//! - [`Document`] / [`LabelGroup`] - Examples grouped by label, with a format version

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

// =============================================================================
// Tabular Data
// =============================================================================

/// A single record of a [`Table`].
///
/// Values are positional and line up with the owning table's headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<String>);

impl Row {
    /// Value at a column index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// Ordered rows sharing the same field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given field names.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a two-column table from value pairs.
    ///
    /// Every row has exactly two values, so no width check is needed.
    pub fn from_pairs<I, A, B>(first: &str, second: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            headers: vec![first.to_string(), second.to_string()],
            rows: pairs
                .into_iter()
                .map(|(a, b)| Row(vec![a.into(), b.into()]))
                .collect(),
        }
    }

    /// Append a row. It must carry exactly one value per header.
    pub fn push_row<I, S>(&mut self, values: I) -> ConvertResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != self.headers.len() {
            return Err(ConvertError::RowWidth {
                row: self.rows.len() + 1,
                expected: self.headers.len(),
                found: values.len(),
            });
        }
        self.rows.push(Row(values));
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a field, or [`ConvertError::MissingField`] naming it.
    pub fn column_index(&self, field: &str) -> ConvertResult<usize> {
        self.headers
            .iter()
            .position(|h| h == field)
            .ok_or_else(|| ConvertError::MissingField(field.to_string()))
    }
}

// =============================================================================
// Structured Document
// =============================================================================

/// All examples sharing one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelGroup {
    pub label: String,
    pub examples: Vec<String>,
}

impl LabelGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            examples: Vec::new(),
        }
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }
}

/// Label groups in first-seen order, tagged with a format version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub version: String,
    pub groups: Vec<LabelGroup>,
}

impl Document {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            groups: Vec::new(),
        }
    }

    /// Total number of examples across all groups.
    pub fn example_count(&self) -> usize {
        self.groups.iter().map(|g| g.examples.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_checks_width() {
        let mut table = Table::new(["text", "intent"]);
        table.push_row(["hello", "greet"]).unwrap();

        let err = table.push_row(["lonely"]).unwrap_err();
        assert_eq!(err, ConvertError::RowWidth { row: 2, expected: 2, found: 1 });
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_column_lookup() {
        let mut table = Table::new(["text", "intent"]);
        table.push_row(["hello", "greet"]).unwrap();
        table.push_row(["bye", "farewell"]).unwrap();

        let index = table.column_index("intent").unwrap();
        assert_eq!(index, 1);
        assert_eq!(table.rows()[1].get(index), Some("farewell"));

        match table.column_index("label") {
            Err(ConvertError::MissingField(field)) => assert_eq!(field, "label"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_document_helpers() {
        let mut doc = Document::new("3.0");
        doc.groups.push(LabelGroup::new("greet").with_examples(["hello", "hi"]));
        doc.groups.push(LabelGroup::new("farewell").with_examples(["bye"]));

        assert_eq!(doc.example_count(), 3);
    }

    #[test]
    fn test_from_pairs() {
        let table = Table::from_pairs("text", "intent", [("hello", "greet"), ("bye", "farewell")]);

        let mut expected = Table::new(["text", "intent"]);
        expected.push_row(["hello", "greet"]).unwrap();
        expected.push_row(["bye", "farewell"]).unwrap();
        assert_eq!(table, expected);
    }

    #[test]
    fn test_table_serializes_rows_as_arrays() {
        let mut table = Table::new(["text", "intent"]);
        table.push_row(["hello", "greet"]).unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["headers"][1], "intent");
        assert_eq!(json["rows"][0][0], "hello");
    }
}
