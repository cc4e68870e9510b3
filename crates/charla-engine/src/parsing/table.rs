use regex::Regex;
use std::sync::OnceLock;

/// Pipe table recognition helpers.
///
/// A pipe table is a pipe-prefixed header line immediately followed by a
/// separator line, then zero or more pipe-prefixed data rows. These helpers
/// only recognize and split lines; assembling lines into a table is the
/// builder's job.
pub struct PipeTable;

impl PipeTable {
    /// Separator rows: optional outer pipes around runs of dashes, colons,
    /// pipes and whitespace. Deliberately permissive, matching what chat
    /// models actually emit (alignment colons, uneven dash counts).
    fn separator_regex() -> &'static Regex {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        SEPARATOR
            .get_or_init(|| Regex::new(r"^\|?\s*[:\-\s|]+\s*\|?$").expect("Invalid separator regex"))
    }

    /// Whether the line (trimmed) matches the separator pattern.
    pub fn is_separator(line: &str) -> bool {
        Self::separator_regex().is_match(line.trim())
    }

    /// Whether the line (trimmed) is pipe-prefixed, i.e. a table row candidate.
    pub fn is_row(line: &str) -> bool {
        line.trim().starts_with('|')
    }

    /// Splits a pipe line into trimmed cell strings.
    ///
    /// Splitting on `|` leaves empty artifacts from the leading and trailing
    /// pipes; the first and last segments are dropped unconditionally.
    pub fn cells(line: &str) -> Vec<String> {
        let parts: Vec<&str> = line.trim().split('|').collect();
        if parts.len() < 2 {
            return vec![];
        }
        parts[1..parts.len() - 1]
            .iter()
            .map(|c| c.trim().to_string())
            .collect()
    }

    /// Whether the text contains at least one pipe table.
    ///
    /// Detection only: finds the first pipe-prefixed line and requires the
    /// following line to match the separator pattern. The rest of the table
    /// is not validated here.
    pub fn detect(text: &str) -> bool {
        let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
        let Some(first) = lines.iter().position(|l| l.starts_with('|')) else {
            return false;
        };
        match lines.get(first + 1) {
            Some(next) => Self::is_separator(next),
            None => false,
        }
    }
}
