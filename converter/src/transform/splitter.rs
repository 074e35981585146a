//! Recover individual examples from a single bundled string.
//!
//! Training files often store a group's examples as one block scalar:
//!
//! ```text
//! examples: |
//!   - hello
//!   - hi
//! ```
//!
//! This is a format convention, not a parser. An example that itself
//! contains the delimiter is split as well.

/// Item prefix used by Rasa training files.
pub const DEFAULT_EXAMPLE_DELIMITER: &str = "- ";

/// Split `blob` on every `delimiter`, dropping blank fragments and trimming the rest.
///
/// An empty delimiter yields the whole trimmed blob as one example.
pub fn split_examples(blob: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        let trimmed = blob.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    blob.split(delimiter)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_with_newlines() {
        let examples = split_examples("- hello\n     - hi\n", DEFAULT_EXAMPLE_DELIMITER);
        assert_eq!(examples, vec!["hello", "hi"]);
    }

    #[test]
    fn test_folded_block() {
        // A `>-` block arrives joined by single spaces.
        let examples = split_examples("- what's up - good morning - hey there", "- ");
        assert_eq!(examples, vec!["what's up", "good morning", "hey there"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split_examples("", "- ").is_empty());
        assert!(split_examples("  \n\t ", "- ").is_empty());
        assert!(split_examples("- \n- ", "- ").is_empty());
    }

    #[test]
    fn test_join_then_split_reproduces_examples() {
        let examples = vec!["book a flight", "cancel my order", "where is my parcel?"];
        let blob: String = examples.iter().map(|e| format!("- {}\n", e)).collect();
        assert_eq!(split_examples(&blob, "- "), examples);
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(split_examples("a | b |  | c", "|"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_text_without_delimiter_is_one_example() {
        assert_eq!(split_examples("  just one  ", "- "), vec!["just one"]);
    }

    #[test]
    fn test_empty_delimiter_keeps_blob_whole() {
        assert_eq!(split_examples(" a b ", ""), vec!["a b"]);
        assert!(split_examples("   ", "").is_empty());
    }

    #[test]
    fn test_delimiter_inside_example_splits_it() {
        // "drop - off" was meant as a single example.
        assert_eq!(split_examples("- pick-up - drop - off", "- "), vec!["pick-up", "drop", "off"]);
    }
}
