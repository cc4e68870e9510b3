use super::table::PipeTable;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// without reference to surrounding context. Whether a pipe-prefixed line
/// actually opens a table depends on its successor and is decided by the
/// builder phase.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The original line, untrimmed. Paragraph text is reassembled from
    /// these verbatim.
    pub text: String,
    /// Whether the trimmed line starts with `|` (table row candidate).
    pub is_pipe: bool,
    /// Whether the trimmed line matches the table separator pattern.
    pub is_separator: bool,
}

/// Classifies individual lines of chat message text.
pub struct MessageLineClassifier;

impl MessageLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, line: &str) -> LineClass {
        LineClass {
            text: line.to_string(),
            is_pipe: PipeTable::is_row(line),
            is_separator: PipeTable::is_separator(line),
        }
    }
}
