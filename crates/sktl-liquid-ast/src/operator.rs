//! Binary operators appearing inside chains

use crate::Segment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator family assigned by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorTag {
    /// `>`
    Greater,
    /// `|`
    Or,
    /// `&`
    And,
    /// `=`
    Equals,
    /// `-`
    Subtract,
    /// `!=`
    Differs,
    /// `+`
    Add,
}

impl OperatorTag {
    /// All tags, in the parser's declaration order
    pub const ALL: [OperatorTag; 7] = [
        Self::Greater,
        Self::Or,
        Self::And,
        Self::Equals,
        Self::Subtract,
        Self::Differs,
        Self::Add,
    ];

    /// Name of the tag as it appears on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greater => "greater",
            Self::Or => "or",
            Self::And => "and",
            Self::Equals => "equals",
            Self::Subtract => "subtract",
            Self::Differs => "differs",
            Self::Add => "add",
        }
    }

    /// The glyph the parser normally records for this tag
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Or => "|",
            Self::And => "&",
            Self::Equals => "=",
            Self::Subtract => "-",
            Self::Differs => "!=",
            Self::Add => "+",
        }
    }

    /// Check if this is a logical connective
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::Or | Self::And)
    }
}

impl fmt::Display for OperatorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary operator whose left operand precedes it in the enclosing chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// Operator family
    pub tag: OperatorTag,
    /// Glyph as written in the source, possibly with surrounding whitespace
    pub op: String,
    /// Right-hand operand
    pub arg: Box<Segment>,
}

impl Operator {
    /// Create an operator using the tag's canonical glyph
    pub fn new(tag: OperatorTag, arg: Segment) -> Self {
        Self {
            tag,
            op: tag.glyph().to_string(),
            arg: Box::new(arg),
        }
    }

    /// Create an operator with an explicit source glyph
    pub fn with_glyph(tag: OperatorTag, op: impl Into<String>, arg: Segment) -> Self {
        Self {
            tag,
            op: op.into(),
            arg: Box::new(arg),
        }
    }

    /// The glyph with surrounding whitespace removed
    pub fn glyph(&self) -> &str {
        self.op.trim()
    }
}
