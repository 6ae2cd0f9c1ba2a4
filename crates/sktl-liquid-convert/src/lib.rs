//! SKTL to Liquid conversion
//!
//! This crate provides:
//! - Segment classification into conversion kinds
//! - The fixed rewrite tables for operators, filters and boolean checks
//! - The recursive converter that pairs blocks through a scope stack
//! - The final literal post-processing pass

pub mod converter;
pub mod error;
pub mod kind;
pub mod post_process;
pub mod scope;
pub mod tables;

pub use converter::Converter;
pub use error::{ConvertError, ConvertResult};
pub use kind::{Kind, TagStyle, classify};
pub use post_process::post_process;
pub use scope::{ScopeKind, ScopeStack};
