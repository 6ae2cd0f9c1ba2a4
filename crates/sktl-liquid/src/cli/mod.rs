//! CLI functionality for the sktl2liquid tool
//!
//! This module contains all CLI-related functionality including:
//! - Loading parsed documents
//! - Conversion
//! - Batch checking
//! - Output formatting

pub mod check;
pub mod convert;
pub mod input;
pub mod output;
