use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Parsed tool output: `== name ==` header, optional `Parámetros: {...}`
/// parameter block, then the body.
///
/// Every field degrades independently: a missing header leaves `tool_name`
/// absent and parameter scanning still runs on the full text; a parameter
/// block that is not valid JSON is kept verbatim rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEnvelope {
    pub tool_name: Option<String>,
    pub parameters_json: Option<String>,
    pub body: String,
}

impl ToolEnvelope {
    /// The parameter block pretty-printed when it parses as a JSON value,
    /// verbatim otherwise. `None` iff no parameter block was present.
    pub fn pretty_parameters(&self) -> Option<String> {
        let raw = self.parameters_json.as_deref()?;
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Some(serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string())),
            Err(_) => Some(raw.to_string()),
        }
    }
}

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"^==\s*(.+?)\s*==\n?").expect("Invalid header regex"))
}

fn params_regex() -> &'static Regex {
    static PARAMS: OnceLock<Regex> = OnceLock::new();
    // Non-greedy to the first `}`: nested objects capture a prefix that
    // fails JSON parsing and is then preserved verbatim.
    PARAMS.get_or_init(|| {
        Regex::new(r"(?s)^Parámetros:\s*(\{.*?\})\n?").expect("Invalid parameter regex")
    })
}

/// Parses a tool-output envelope. Single pass, never fails.
pub fn parse_tool_envelope(text: &str) -> ToolEnvelope {
    let mut rest = text;

    let tool_name = match header_regex().captures(rest) {
        Some(caps) => {
            let name = caps[1].to_string();
            rest = &rest[caps.get(0).map_or(0, |m| m.end())..];
            Some(name)
        }
        None => None,
    };

    let parameters_json = match params_regex().captures(rest) {
        Some(caps) => {
            let json = caps[1].to_string();
            rest = &rest[caps.get(0).map_or(0, |m| m.end())..];
            Some(json)
        }
        None => None,
    };

    ToolEnvelope {
        tool_name,
        parameters_json,
        body: rest.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_envelope() {
        let env = parse_tool_envelope(
            "== grep ==\nParámetros: {\"pattern\":\"foo\"}\nresult line",
        );
        assert_eq!(
            env,
            ToolEnvelope {
                tool_name: Some("grep".to_string()),
                parameters_json: Some("{\"pattern\":\"foo\"}".to_string()),
                body: "result line".to_string(),
            }
        );
    }

    #[test]
    fn no_header_is_all_body() {
        let env = parse_tool_envelope("no header here");
        assert_eq!(env.tool_name, None);
        assert_eq!(env.parameters_json, None);
        assert_eq!(env.body, "no header here");
    }

    #[test]
    fn parameters_without_header_are_still_stripped() {
        let env = parse_tool_envelope("Parámetros: {\"a\":1}\noutput");
        assert_eq!(env.tool_name, None);
        assert_eq!(env.parameters_json.as_deref(), Some("{\"a\":1}"));
        assert_eq!(env.body, "output");
    }

    #[test]
    fn header_without_parameters() {
        let env = parse_tool_envelope("== ls ==\ntotal 0\ndrwxr-xr-x .");
        assert_eq!(env.tool_name.as_deref(), Some("ls"));
        assert_eq!(env.parameters_json, None);
        assert_eq!(env.body, "total 0\ndrwxr-xr-x .");
    }

    #[test]
    fn header_name_is_trimmed() {
        let env = parse_tool_envelope("==   df -h   ==\nbody");
        assert_eq!(env.tool_name.as_deref(), Some("df -h"));
    }

    #[test]
    fn header_not_at_start_is_body() {
        let env = parse_tool_envelope("prefix\n== grep ==\nbody");
        assert_eq!(env.tool_name, None);
        assert_eq!(env.body, "prefix\n== grep ==\nbody");
    }

    #[test]
    fn body_is_trimmed() {
        let env = parse_tool_envelope("== t ==\n\n  output  \n\n");
        assert_eq!(env.body, "output");
    }

    #[test]
    fn empty_input_produces_empty_envelope() {
        let env = parse_tool_envelope("");
        assert_eq!(
            env,
            ToolEnvelope {
                tool_name: None,
                parameters_json: None,
                body: String::new(),
            }
        );
    }

    #[test]
    fn nested_object_captures_to_first_brace() {
        // lazy match stops at the first `}`; the truncated span is kept
        // verbatim since it fails to parse as JSON
        let env = parse_tool_envelope("Parámetros: {\"a\":{\"b\":1}}\nbody");
        assert_eq!(env.parameters_json.as_deref(), Some("{\"a\":{\"b\":1}"));
        assert_eq!(env.pretty_parameters().as_deref(), Some("{\"a\":{\"b\":1}"));
    }

    #[test]
    fn pretty_parameters_formats_valid_json() {
        let env = parse_tool_envelope("Parámetros: {\"pattern\":\"foo\"}\nbody");
        assert_eq!(
            env.pretty_parameters().as_deref(),
            Some("{\n  \"pattern\": \"foo\"\n}")
        );
    }

    #[test]
    fn pretty_parameters_absent_without_block() {
        let env = parse_tool_envelope("just output");
        assert_eq!(env.pretty_parameters(), None);
    }
}
