use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        };
        f.write_str(s)
    }
}

/// Discrete render hint the server may attach to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayAs {
    Text,
    Code,
}

/// One transcript record: role, text payload, optional render hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_as: Option<DisplayAs>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            display_as: None,
        }
    }

    /// Render as code only when the server explicitly requests it or when
    /// the role is `tool`.
    pub fn renders_as_code(&self) -> bool {
        self.display_as == Some(DisplayAs::Code) || self.role == Role::Tool
    }
}

fn command_word_regex() -> &'static Regex {
    static COMMAND_WORD: OnceLock<Regex> = OnceLock::new();
    COMMAND_WORD
        .get_or_init(|| Regex::new(r"\b(ps|top|ls|df|du|grep|awk|sed)\b").expect("Invalid command regex"))
}

fn dashed_pipe_regex() -> &'static Regex {
    static DASHED_PIPE: OnceLock<Regex> = OnceLock::new();
    DASHED_PIPE.get_or_init(|| Regex::new(r"\|\s*-+\s*\|").expect("Invalid dashed pipe regex"))
}

/// Heuristic for text that probably wants preformatted rendering.
///
/// Kept as a fallback; the default dispatch relies on the explicit
/// `display_as` hint instead.
pub fn looks_like_code(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if text.split('\n').count() > 1 {
        return true;
    }
    command_word_regex().is_match(text) || dashed_pipe_regex().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_role_renders_as_code() {
        assert!(Message::new(Role::Tool, "output").renders_as_code());
    }

    #[test]
    fn code_hint_renders_as_code() {
        let mut m = Message::new(Role::Assistant, "x");
        assert!(!m.renders_as_code());
        m.display_as = Some(DisplayAs::Code);
        assert!(m.renders_as_code());
    }

    #[test]
    fn message_serde_roundtrip() {
        let m = Message::new(Role::User, "hola");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hola"}"#);
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn display_as_deserializes_from_transport_form() {
        let m: Message =
            serde_json::from_str(r#"{"role":"tool","content":"x","display_as":"code"}"#).unwrap();
        assert_eq!(m.display_as, Some(DisplayAs::Code));
    }

    #[test]
    fn multiline_text_looks_like_code() {
        assert!(looks_like_code("line one\nline two"));
    }

    #[test]
    fn command_words_look_like_code() {
        assert!(looks_like_code("run ps aux to check"));
        assert!(looks_like_code("grep pattern file"));
    }

    #[test]
    fn dashed_pipe_run_looks_like_code() {
        assert!(looks_like_code("| --- |"));
    }

    #[test]
    fn prose_does_not_look_like_code() {
        assert!(!looks_like_code("hello there"));
        assert!(!looks_like_code(""));
    }
}
