//! Call tree rendering.
//!
//! This module converts a parsed trace into:
//! - A nested HTML document (one container level per depth)
//! - An indented text tree for terminal output

pub mod html;
pub mod text;

// Re-export main types
pub use html::{html_escape, render_html, render_html_document, HtmlConfig};
pub use text::generate_text_summary;
