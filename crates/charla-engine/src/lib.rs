pub mod message;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use message::{DisplayAs, Message, Role, looks_like_code};
pub use parsing::{Block, ToolEnvelope, parse_tool_envelope, segment};
pub use render::html::{render_message, render_page, render_transcript};
