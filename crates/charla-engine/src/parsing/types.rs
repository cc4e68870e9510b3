use serde::{Deserialize, Serialize};

/// A segment of message content, either free text or a pipe table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Literal prose, newline-separated. Escaping and emphasis are applied
    /// at render time, not here.
    Paragraph { text: String },
    /// A parsed pipe table. Cell strings are raw; escaping and emphasis are
    /// a per-cell rendering concern. Rows may be ragged relative to the
    /// header (the renderer truncates or pads visually).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl Block {
    /// Reconstructs the markdown source for this block.
    ///
    /// Paragraphs return their text unchanged; tables are re-serialized to
    /// pipe syntax with a regenerated separator row.
    pub fn to_source(&self) -> String {
        match self {
            Block::Paragraph { text } => text.clone(),
            Block::Table { headers, rows } => {
                let mut lines = Vec::with_capacity(rows.len() + 2);
                lines.push(pipe_row(headers));
                lines.push(pipe_row(&vec!["---".to_string(); headers.len()]));
                for row in rows {
                    lines.push(pipe_row(row));
                }
                lines.join("\n")
            }
        }
    }
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_source_is_verbatim() {
        let b = Block::Paragraph {
            text: "line one\nline two".to_string(),
        };
        assert_eq!(b.to_source(), "line one\nline two");
    }

    #[test]
    fn table_source_regenerates_separator() {
        let b = Block::Table {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        };
        assert_eq!(b.to_source(), "| a | b |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn block_serde_roundtrip() {
        let b = Block::Table {
            headers: vec!["h".to_string()],
            rows: vec![],
        };
        let json = serde_json::to_string(&b).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
