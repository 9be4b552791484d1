//! snipstash-highlight
//!
//! In-process syntax highlighting over syntect. Produces class-annotated
//! HTML plus per-theme CSS so callers can restyle without re-rendering.

pub mod error;
pub mod render;

pub use error::HighlightError;
pub use render::{DEFAULT_THEME, Highlighted, Highlighter};
