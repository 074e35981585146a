//! Conversion settings shared by both directions.

use serde::{Deserialize, Serialize};

use crate::transform::splitter::DEFAULT_EXAMPLE_DELIMITER;

/// YAML block scalar style used when rendering a group's examples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleBlock {
    /// `examples: >-`
    #[default]
    Folded,
    /// `examples: |`
    Literal,
}

impl ExampleBlock {
    pub fn indicator(self) -> &'static str {
        match self {
            ExampleBlock::Folded => ">-",
            ExampleBlock::Literal => "|",
        }
    }
}

/// Field mapping and format settings for a conversion.
///
/// Never mutated by the conversions themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// CSV column holding the label.
    pub label_field: String,
    /// CSV column holding the example text.
    pub text_field: String,
    /// Document key holding a group's examples.
    pub examples_key: String,
    /// Document key holding a group's label.
    pub label_key: String,
    /// Value of the document's `version` field.
    pub format_version: String,
    /// Separator between examples bundled in a single string.
    pub example_delimiter: String,
    pub example_block: ExampleBlock,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            label_field: "intent".to_string(),
            text_field: "text".to_string(),
            examples_key: "examples".to_string(),
            label_key: "intent".to_string(),
            format_version: "3.0".to_string(),
            example_delimiter: DEFAULT_EXAMPLE_DELIMITER.to_string(),
            example_block: ExampleBlock::default(),
        }
    }
}

impl Configuration {
    pub fn with_label_field(mut self, field: impl Into<String>) -> Self {
        self.label_field = field.into();
        self
    }

    pub fn with_text_field(mut self, field: impl Into<String>) -> Self {
        self.text_field = field.into();
        self
    }

    pub fn with_examples_key(mut self, key: impl Into<String>) -> Self {
        self.examples_key = key.into();
        self
    }

    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    pub fn with_format_version(mut self, version: impl Into<String>) -> Self {
        self.format_version = version.into();
        self
    }

    pub fn with_example_block(mut self, block: ExampleBlock) -> Self {
        self.example_block = block;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rasa_layout() {
        let config = Configuration::default();
        assert_eq!(config.label_field, "intent");
        assert_eq!(config.text_field, "text");
        assert_eq!(config.examples_key, "examples");
        assert_eq!(config.format_version, "3.0");
        assert_eq!(config.example_delimiter, "- ");
        assert_eq!(config.example_block.indicator(), ">-");
    }

    #[test]
    fn test_partial_config_from_json() {
        let config: Configuration =
            serde_json::from_str(r#"{"labelField": "label", "exampleBlock": "literal"}"#).unwrap();
        assert_eq!(config.label_field, "label");
        assert_eq!(config.text_field, "text");
        assert_eq!(config.example_block, ExampleBlock::Literal);
    }
}
