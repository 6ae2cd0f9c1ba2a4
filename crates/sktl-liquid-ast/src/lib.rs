//! SKTL segment tree definitions
//!
//! This crate defines the segments an external SKTL parser produces. The tree
//! is consumed as-is by the converter; nothing here parses template text.
//! Segments serialize to the parser's own JSON shape (single-key maps such as
//! `{"call_or_variable": {"name": "course"}}`), so parsed documents can be
//! exchanged as files.

mod document;
mod operator;
mod segment;

pub use document::*;
pub use operator::*;
pub use segment::*;
