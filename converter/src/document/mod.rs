//! Rasa NLU training documents.
//!
//! Reads YAML of the form
//!
//! ```yaml
//! version: "3.0"
//! nlu:
//!   - intent: greet
//!     examples: |
//!       - hello
//!       - hi
//! ```
//!
//! into a [`Document`], and renders a [`Document`] back to that layout.
//! Only the keys needed for conversion are checked; nothing else in the
//! file is validated.

use serde_yaml::Value;
use tracing::{debug, warn};

use crate::config::Configuration;
use crate::error::{ConvertError, ConvertResult, DocumentResult};
use crate::models::{Document, LabelGroup};
use crate::transform::splitter::split_examples;

/// Top-level key holding the list of groups.
pub const GROUPS_KEY: &str = "nlu";

/// Top-level key holding the format version.
pub const VERSION_KEY: &str = "version";

// =============================================================================
// Reading
// =============================================================================

/// Parse YAML text into a [`Document`].
pub fn parse_document(text: &str, config: &Configuration) -> DocumentResult<Document> {
    let value: Value = serde_yaml::from_str(text)?;
    Ok(document_from_value(&value, config)?)
}

/// Build a [`Document`] from an already parsed YAML value.
///
/// Examples stored as a single string are split with
/// `config.example_delimiter`; native lists are taken as-is. Entries that
/// repeat a label are merged into the first group with that label.
pub fn document_from_value(value: &Value, config: &Configuration) -> ConvertResult<Document> {
    if !value.is_mapping() {
        return Err(ConvertError::MalformedDocument(
            "expected a mapping at the top level".to_string(),
        ));
    }

    let version = match value.get(VERSION_KEY) {
        Some(v) => scalar_to_string(v).unwrap_or_default(),
        None => {
            warn!("document has no `{}` field", VERSION_KEY);
            String::new()
        }
    };

    let entries = value
        .get(GROUPS_KEY)
        .ok_or_else(|| {
            ConvertError::MalformedDocument(format!("missing top-level `{}` list", GROUPS_KEY))
        })?
        .as_sequence()
        .ok_or_else(|| ConvertError::MalformedDocument(format!("`{}` must be a list", GROUPS_KEY)))?;

    let mut document = Document::new(version);

    for (i, entry) in entries.iter().enumerate() {
        let group = group_from_entry(i, entry, config)?;

        match document.groups.iter_mut().find(|g| g.label == group.label) {
            Some(existing) => {
                debug!(label = %group.label, entry = i, "merging repeated label");
                existing.examples.extend(group.examples);
            }
            None => document.groups.push(group),
        }
    }

    debug!(
        groups = document.groups.len(),
        examples = document.example_count(),
        "read document"
    );
    Ok(document)
}

fn group_from_entry(index: usize, entry: &Value, config: &Configuration) -> ConvertResult<LabelGroup> {
    if !entry.is_mapping() {
        return Err(ConvertError::MalformedDocument(format!(
            "`{}` entry {} must be a mapping",
            GROUPS_KEY, index
        )));
    }

    let label = entry
        .get(config.label_key.as_str())
        .ok_or_else(|| ConvertError::MissingField(config.label_key.clone()))?;
    let label = scalar_to_string(label).ok_or_else(|| {
        ConvertError::MalformedDocument(format!(
            "`{}` of entry {} must be a scalar value",
            config.label_key, index
        ))
    })?;

    let examples = entry
        .get(config.examples_key.as_str())
        .ok_or_else(|| ConvertError::MissingField(config.examples_key.clone()))?;

    let examples = match untag(examples) {
        Value::String(blob) => split_examples(blob, &config.example_delimiter),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_to_string(item).ok_or_else(|| {
                    ConvertError::MalformedDocument(format!(
                        "`{}` of intent '{}' must contain only scalar values",
                        config.examples_key, label
                    ))
                })
            })
            .collect::<ConvertResult<Vec<_>>>()?,
        Value::Null => Vec::new(),
        _ => {
            return Err(ConvertError::MalformedDocument(format!(
                "`{}` of intent '{}' must be a string or a list",
                config.examples_key, label
            )))
        }
    };

    Ok(LabelGroup { label, examples })
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// String form of a YAML scalar; `None` for null, lists and mappings.
fn scalar_to_string(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a [`Document`] as Rasa NLU YAML.
///
/// Each example is written on its own `- ` line inside a block scalar
/// (`>-` or `|` per `config.example_block`). Line breaks inside an example
/// are folded into single spaces.
pub fn render_document(document: &Document, config: &Configuration) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: {}\n", VERSION_KEY, quoted(&document.version)));
    if document.groups.is_empty() {
        out.push_str(&format!("{}: []\n", GROUPS_KEY));
        return out;
    }
    out.push_str(&format!("{}:\n", GROUPS_KEY));

    for group in &document.groups {
        out.push_str(&format!("  - {}: {}\n", config.label_key, plain_scalar(&group.label)));
        out.push_str(&format!(
            "    {}: {}\n",
            config.examples_key,
            config.example_block.indicator()
        ));
        for example in &group.examples {
            out.push_str(&format!("     {}{}\n", config.example_delimiter, single_line(example)));
        }
    }

    out
}

fn quoted(value: &str) -> String {
    // A JSON string is a valid double-quoted YAML scalar.
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

/// Plain YAML scalar when that round-trips, double-quoted otherwise.
fn plain_scalar(value: &str) -> String {
    match serde_yaml::to_string(value) {
        Ok(rendered) if !rendered.trim_end().contains('\n') => rendered.trim_end().to_string(),
        _ => quoted(value),
    }
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
