use super::escape::{apply_strong, escape_html};
use crate::message::{Message, Role};
use crate::parsing::{Block, PipeTable, ToolEnvelope, parse_tool_envelope, segment};

/// Renders one block to an HTML fragment.
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { text } => {
            let inner = apply_strong(&escape_html(text)).replace('\n', "<br>");
            format!("<div>{inner}</div>")
        }
        Block::Table { headers, rows } => render_table(headers, rows),
    }
}

/// Renders an ordered block sequence, one fragment per line.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table class=\"pipe-table\"><thead><tr>");
    for h in headers {
        html.push_str(&format!("<th>{}</th>", escape_html(h)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            // cells are raw at parse time: escape first, then emphasis
            html.push_str(&format!("<td>{}</td>", apply_strong(&escape_html(cell))));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Renders preformatted text.
pub fn render_code(text: &str) -> String {
    format!("<pre class=\"code-block\">{}</pre>", escape_html(text))
}

/// Renders a tool envelope: header line, optional collapsible parameter
/// panel, output block.
pub fn render_tool_envelope(envelope: &ToolEnvelope) -> String {
    let mut html = String::from("<div class=\"tool-container\">");

    let header = match &envelope.tool_name {
        Some(name) => format!("Herramienta: {}", escape_html(name)),
        None => "Herramienta".to_string(),
    };
    html.push_str(&format!("<div class=\"tool-header\">{header}</div>"));

    if let Some(params) = envelope.pretty_parameters() {
        html.push_str(&format!(
            "<details class=\"params-wrapper\"><summary class=\"params-toggle\">Mostrar parámetros</summary><pre class=\"json-block\">{}</pre></details>",
            escape_html(&params)
        ));
    }

    html.push_str(&render_code(&envelope.body));
    html.push_str("</div>");
    html
}

fn render_typing_indicator() -> String {
    let dots = "<span class=\"dot\"></span>".repeat(3);
    format!("<div class=\"typing-indicator\">{dots}</div>")
}

/// Renders one message, dispatching on content and render hints.
///
/// Dispatch order follows the original renderer: pipe-table content wins
/// over the code hint, the code hint routes tool messages through the
/// envelope parser, and an assistant message of exactly `...` becomes the
/// typing indicator. Everything else goes through the segmenter.
pub fn render_message(message: &Message) -> String {
    let body = if PipeTable::detect(&message.content) {
        render_blocks(&segment(&message.content))
    } else if message.renders_as_code() {
        if message.role == Role::Tool {
            render_tool_envelope(&parse_tool_envelope(&message.content))
        } else {
            render_code(&message.content)
        }
    } else if message.role == Role::Assistant && message.content.trim() == "..." {
        render_typing_indicator()
    } else {
        render_blocks(&segment(&message.content))
    };

    let role = message.role;
    format!(
        "<div class=\"msg {role}\"><div class=\"role\">{role}</div><div class=\"text\">{body}</div></div>"
    )
}

/// Renders a transcript, skipping `system` messages.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.role != Role::System)
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps a transcript in a minimal standalone HTML document.
pub fn render_page(title: &str, stylesheet: Option<&str>, messages: &[Message]) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    if let Some(href) = stylesheet {
        page.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(href)
        ));
    }
    page.push_str("</head>\n<body>\n<div id=\"chatLog\">\n");
    page.push_str(&render_transcript(messages));
    page.push_str("\n</div>\n</body>\n</html>\n");
    page
}
