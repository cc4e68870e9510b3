//! # Message Text Parsing
//!
//! Two-phase segmentation of chat message text into typed blocks, plus the
//! standalone tool-envelope parser.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` containing local facts (pipe prefix, separator-pattern
//!    match)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` walks the
//!    classified lines with a cursor and emits `Paragraph` and `Table`
//!    blocks, buffering prose between tables
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum
//! - **`classify`**: `MessageLineClassifier` produces `LineClass` per line
//! - **`table`**: `PipeTable` recognition helpers (separator pattern, cell
//!   splitting, whole-text detection)
//! - **`builder`**: `BlockBuilder` state machine for block construction
//! - **`envelope`**: `ToolEnvelope` parsing, independent of segmentation
//!
//! ## Key Invariants
//!
//! - Segmentation never fails: malformed tables degrade to paragraph text
//! - Every content line of the input appears in exactly one emitted block
//!   (the table separator row is consumed, not retained)
//! - A table requires a pipe-prefixed header line immediately followed by a
//!   separator line; anything less is prose

pub mod builder;
pub mod classify;
pub mod envelope;
pub mod table;
pub mod types;


pub use builder::BlockBuilder;
pub use classify::{LineClass, MessageLineClassifier};
pub use envelope::{ToolEnvelope, parse_tool_envelope};
pub use table::PipeTable;
pub use types::Block;

/// Segments message text into an ordered sequence of blocks.
///
/// Prose accumulates into `Paragraph` blocks; a pipe-prefixed line whose
/// immediate successor matches the separator pattern opens a `Table` that
/// consumes every following pipe-prefixed line. Empty or whitespace-only
/// input produces no blocks.
pub fn segment(text: &str) -> Vec<Block> {
    if text.trim().is_empty() {
        return vec![];
    }

    let classifier = MessageLineClassifier;
    let classes: Vec<LineClass> = text.split('\n').map(|l| classifier.classify(l)).collect();

    let mut builder = BlockBuilder::new();
    let mut i = 0;
    while i < classes.len() {
        let starts_table = classes[i].is_pipe
            && classes
                .get(i + 1)
                .is_some_and(|next| next.is_separator);

        if starts_table {
            builder.flush_paragraph();

            let headers = PipeTable::cells(&classes[i].text);
            i += 2; // header consumed, separator discarded

            let mut rows = Vec::new();
            while i < classes.len() && classes[i].is_pipe {
                rows.push(PipeTable::cells(&classes[i].text));
                i += 1;
            }
            builder.push_table(headers, rows);
        } else {
            builder.push_text_line(&classes[i].text);
            i += 1;
        }
    }

    builder.finish()
}
