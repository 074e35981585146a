//! Flatten a training document back into text/label rows.

use tracing::debug;

use crate::config::Configuration;
use crate::models::{Document, Table};

/// Emit one `[text, label]` row per example, in group then example order.
///
/// A group without examples contributes no rows.
pub fn document_to_table(document: &Document, config: &Configuration) -> Table {
    let pairs = document.groups.iter().flat_map(|group| {
        group
            .examples
            .iter()
            .map(move |example| (example.as_str(), group.label.as_str()))
    });
    let table = Table::from_pairs(&config.text_field, &config.label_field, pairs);

    debug!(
        groups = document.groups.len(),
        rows = table.len(),
        "flattened document"
    );
    table
}
