//! Conversion errors

use crate::Kind;
use sktl_liquid_ast::Segment;
use sktl_liquid_diagnostics::{Diagnostic, ErrorCode, SKL0001, SKL0002, SKL0003};
use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that abort the conversion of a document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No conversion rule exists for the segment
    #[error("Unsupported segment: {}", .segment.to_json())]
    UnsupportedSegment { segment: Box<Segment> },

    /// The segment was classified but lacks the shape its rule relies on
    #[error("Malformed {kind} segment: {reason}")]
    MalformedShape {
        kind: Kind,
        reason: String,
        segment: Box<Segment>,
    },

    /// `end` with no open block
    #[error("`end` without an open block")]
    UnbalancedScope,
}

impl ConvertError {
    /// Create an unsupported segment error
    pub fn unsupported(segment: &Segment) -> Self {
        Self::UnsupportedSegment {
            segment: Box::new(segment.clone()),
        }
    }

    /// Create a malformed shape error
    pub fn malformed(kind: Kind, reason: impl Into<String>, segment: &Segment) -> Self {
        Self::MalformedShape {
            kind,
            reason: reason.into(),
            segment: Box::new(segment.clone()),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedSegment { .. } => SKL0001,
            Self::MalformedShape { .. } => SKL0002,
            Self::UnbalancedScope => SKL0003,
        }
    }

    /// The offending segment, if one is known
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            Self::UnsupportedSegment { segment } | Self::MalformedShape { segment, .. } => {
                Some(segment)
            }
            Self::UnbalancedScope => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self.segment() {
            Some(segment) => diag.with_subject(segment.to_json()),
            None => diag,
        }
    }
}
