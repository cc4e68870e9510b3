use super::types::Block;

/// State machine assembling classified lines into blocks.
///
/// Prose lines accumulate in a buffer that is flushed as a single
/// `Paragraph` (joined with literal newlines) whenever a table opens or the
/// input ends. Tables are pushed fully formed by the caller, which owns the
/// cursor and the lookahead decision.
pub struct BlockBuilder {
    buffer: Vec<String>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            buffer: vec![],
            out: vec![],
        }
    }

    /// Appends a prose line to the pending paragraph buffer.
    pub fn push_text_line(&mut self, line: &str) {
        self.buffer.push(line.to_string());
    }

    /// Emits the pending paragraph, if any. A buffer with no content (empty,
    /// or only blank lines) flushes nothing, so tables separated by nothing
    /// but whitespace produce no empty `Paragraph` between them. Blank lines
    /// at the buffer boundaries are trimmed; interior blank lines are
    /// preserved.
    pub fn flush_paragraph(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let is_blank = |l: &String| l.trim().is_empty();

        // Trim blank boundary lines (block separation artifacts); interior
        // blank lines belong to the paragraph.
        let Some(first) = buffer.iter().position(|l| !is_blank(l)) else {
            return;
        };
        let last = buffer.iter().rposition(|l| !is_blank(l)).unwrap_or(first);

        let text = buffer[first..=last].join("\n");
        self.out.push(Block::Paragraph { text });
    }

    /// Emits a table block. The caller has already consumed the separator
    /// row; header and data rows arrive as split cell lists.
    pub fn push_table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.out.push(Block::Table { headers, rows });
    }

    /// Flushes any pending paragraph and returns the ordered block list.
    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        self.out
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
