//! Conversion error codes following a structured numbering system
//!
//! Error code ranges:
//! - SKL0001-SKL0099: Conversion errors (segment tree cannot be translated)
//! - SKL0100-SKL0199: Input errors (document cannot be read or decoded)
//! - SKL0200-SKL0299: Lint findings (document converted, but something looks off)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a conversion error (0001-0099)
    pub const fn is_conversion_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is an input error (0100-0199)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a lint finding (0200-0299)
    pub const fn is_lint(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SKL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Conversion errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Unsupported segment")
            .with_help("Only the known SKTL constructs can be converted; rewrite this one by hand"),
    );
    map.insert(
        2,
        ErrorInfo::new("Malformed segment shape")
            .with_help("The segment was recognised but its arguments do not have the expected form"),
    );
    map.insert(
        3,
        ErrorInfo::new("Unbalanced block scope")
            .with_help("An `end` appears without a matching if, unless, each, search or learning_path_item"),
    );

    // Input errors (0100-0199)
    map.insert(100, ErrorInfo::new("Invalid parsed document"));
    map.insert(101, ErrorInfo::new("I/O error"));

    // Lint findings (0200-0299)
    map.insert(
        200,
        ErrorInfo::new("Unclosed block scope")
            .with_help("The document ends while one or more blocks are still open"),
    );

    map
});

// Conversion errors
pub const SKL0001: ErrorCode = ErrorCode::new(1);
pub const SKL0002: ErrorCode = ErrorCode::new(2);
pub const SKL0003: ErrorCode = ErrorCode::new(3);

// Input errors
pub const SKL0100: ErrorCode = ErrorCode::new(100);
pub const SKL0101: ErrorCode = ErrorCode::new(101);

// Lint findings
pub const SKL0200: ErrorCode = ErrorCode::new(200);
