//! # Rendering Adapter
//!
//! Maps parsed values (`Block`, `ToolEnvelope`, `Message`) to HTML
//! fragments. No parsing decisions live here beyond calling the core entry
//! points; the contract is that literal text content appears verbatim in
//! the output, modulo escaping.
//!
//! ## Modules
//!
//! - **`escape`**: HTML escaping and `**bold**` emphasis, in that order
//! - **`html`**: fragment builders for blocks, envelopes, messages, pages

pub mod escape;
pub mod html;

pub use escape::{apply_strong, escape_html};
