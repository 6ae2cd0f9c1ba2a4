//! SKTL to Liquid diagnostics
//!
//! This crate provides the error reporting vocabulary shared by the converter
//! and the command-line tool: stable error codes and diagnostic records.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;
