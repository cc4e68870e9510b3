use regex::Regex;
use std::sync::OnceLock;

/// Escapes the five HTML-significant characters.
///
/// `&` is replaced first so entities produced by the later replacements are
/// not double-escaped. Pure and total.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

fn strong_regex() -> &'static Regex {
    static STRONG: OnceLock<Regex> = OnceLock::new();
    // Non-greedy, does not cross newlines.
    STRONG.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid emphasis regex"))
}

/// Wraps `**bold**` spans in `<strong>`.
///
/// Must be applied to already-escaped text so literal `<`/`>` inside a span
/// cannot inject structure. Unmatched or unbalanced `**` is left literal.
pub fn apply_strong(s: &str) -> String {
    strong_regex().replace_all(s, "<strong>$1</strong>").into_owned()
}
