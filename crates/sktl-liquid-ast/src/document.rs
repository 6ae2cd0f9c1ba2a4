//! Parsed template documents

use crate::Segment;
use serde::{Deserialize, Serialize};

/// A whole parsed template: the parser's top-level segment list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub template: Vec<Segment>,
}

impl Template {
    /// Create a template from its top-level segments
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { template: segments }
    }

    /// Decode a template from the parser's JSON output
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Top-level segments, in document order
    pub fn segments(&self) -> &[Segment] {
        &self.template
    }

    /// Check if the template has no segments
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }
}

impl From<Vec<Segment>> for Template {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}
