//! Segment nodes and their wire representation

use crate::{Operator, OperatorTag};
use serde::{Deserialize, Serialize};

/// One node of a parsed SKTL template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSegment", into = "RawSegment")]
pub enum Segment {
    /// Literal template text between tags
    Text(String),
    /// String literal (quotes already stripped)
    StringLiteral(String),
    /// Numeric literal, kept as written
    NumberLiteral(String),
    /// Dotted expression chain, evaluated left to right
    Chain(Vec<Segment>),
    /// Bare identifier or zero-argument reference
    CallOrVariable(Variable),
    /// Named invocation
    Call(Call),
    /// Block terminator (`end`)
    Ending,
    /// Binary operator suffix inside a chain
    Operator(Operator),
}

impl Segment {
    /// Create a text segment
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }

    /// Create a number literal
    pub fn number(value: impl Into<String>) -> Self {
        Self::NumberLiteral(value.into())
    }

    /// Create a variable reference
    pub fn var(name: impl Into<String>) -> Self {
        Self::CallOrVariable(Variable::new(name))
    }

    /// Create a call
    pub fn call(name: impl Into<String>, args: Vec<Segment>) -> Self {
        Self::Call(Call::new(name, args))
    }

    /// Create a chain
    pub fn chain(segments: Vec<Segment>) -> Self {
        Self::Chain(segments)
    }

    /// Create an operator suffix using the tag's canonical glyph
    pub fn op(tag: OperatorTag, arg: Segment) -> Self {
        Self::Operator(Operator::new(tag, arg))
    }

    /// Build a chain of variables from a dotted path (`course.name`)
    pub fn path(path: &str) -> Self {
        Self::Chain(path.split('.').map(Segment::var).collect())
    }

    /// Name of a call or variable
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::CallOrVariable(var) => Some(&var.name),
            Self::Call(call) => Some(&call.name),
            _ => None,
        }
    }

    /// The call payload, if this is a call named `name`
    pub fn as_call_named(&self, name: &str) -> Option<&Call> {
        match self {
            Self::Call(call) if call.name == name => Some(call),
            _ => None,
        }
    }

    /// The string value, if this is a string literal
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Self::StringLiteral(value) => Some(value),
            _ => None,
        }
    }

    /// Wire name of this segment's tag
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::StringLiteral(_) => "string",
            Self::NumberLiteral(_) => "number",
            Self::Chain(_) => "chain",
            Self::CallOrVariable(_) => "call_or_variable",
            Self::Call(_) => "call",
            Self::Ending => "ending",
            Self::Operator(op) => op.tag.as_str(),
        }
    }

    /// Compact JSON rendering in the parser's shape
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("<{}>", self.tag_name()))
    }
}

/// A bare identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named invocation with zero or more arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Args>,
}

impl Call {
    /// Create a call; a single argument is stored unwrapped, as the parser does
    pub fn new(name: impl Into<String>, mut args: Vec<Segment>) -> Self {
        let args = match args.len() {
            0 => None,
            1 => args.pop().map(|arg| Args::One(Box::new(arg))),
            _ => Some(Args::Many(args)),
        };
        Self {
            name: name.into(),
            args,
        }
    }

    /// Arguments as a slice, regardless of how the parser grouped them
    pub fn args(&self) -> &[Segment] {
        match &self.args {
            None => &[],
            Some(Args::One(arg)) => std::slice::from_ref(arg.as_ref()),
            Some(Args::Many(args)) => args,
        }
    }

    /// The argument, if there is exactly one
    pub fn single_arg(&self) -> Option<&Segment> {
        match self.args() {
            [arg] => Some(arg),
            _ => None,
        }
    }
}

/// Call arguments: the parser emits a bare segment for one argument and a
/// list for several
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Args {
    Many(Vec<Segment>),
    One(Box<Segment>),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawSegment {
    Text(String),
    String(String),
    Number(String),
    Chain(Vec<Segment>),
    CallOrVariable(Variable),
    Call(Call),
    Ending,
    Greater(RawOperator),
    Or(RawOperator),
    And(RawOperator),
    Equals(RawOperator),
    Subtract(RawOperator),
    Differs(RawOperator),
    Add(RawOperator),
}

#[derive(Serialize, Deserialize)]
struct RawOperator {
    op: String,
    arg: Box<Segment>,
}

impl RawOperator {
    fn into_operator(self, tag: OperatorTag) -> Operator {
        Operator {
            tag,
            op: self.op,
            arg: self.arg,
        }
    }
}

impl From<RawSegment> for Segment {
    fn from(raw: RawSegment) -> Self {
        match raw {
            RawSegment::Text(text) => Self::Text(text),
            RawSegment::String(value) => Self::StringLiteral(value),
            RawSegment::Number(value) => Self::NumberLiteral(value),
            RawSegment::Chain(segments) => Self::Chain(segments),
            RawSegment::CallOrVariable(var) => Self::CallOrVariable(var),
            RawSegment::Call(call) => Self::Call(call),
            RawSegment::Ending => Self::Ending,
            RawSegment::Greater(op) => Self::Operator(op.into_operator(OperatorTag::Greater)),
            RawSegment::Or(op) => Self::Operator(op.into_operator(OperatorTag::Or)),
            RawSegment::And(op) => Self::Operator(op.into_operator(OperatorTag::And)),
            RawSegment::Equals(op) => Self::Operator(op.into_operator(OperatorTag::Equals)),
            RawSegment::Subtract(op) => Self::Operator(op.into_operator(OperatorTag::Subtract)),
            RawSegment::Differs(op) => Self::Operator(op.into_operator(OperatorTag::Differs)),
            RawSegment::Add(op) => Self::Operator(op.into_operator(OperatorTag::Add)),
        }
    }
}

impl From<Segment> for RawSegment {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Text(text) => Self::Text(text),
            Segment::StringLiteral(value) => Self::String(value),
            Segment::NumberLiteral(value) => Self::Number(value),
            Segment::Chain(segments) => Self::Chain(segments),
            Segment::CallOrVariable(var) => Self::CallOrVariable(var),
            Segment::Call(call) => Self::Call(call),
            Segment::Ending => Self::Ending,
            Segment::Operator(Operator { tag, op, arg }) => {
                let raw = RawOperator { op, arg };
                match tag {
                    OperatorTag::Greater => Self::Greater(raw),
                    OperatorTag::Or => Self::Or(raw),
                    OperatorTag::And => Self::And(raw),
                    OperatorTag::Equals => Self::Equals(raw),
                    OperatorTag::Subtract => Self::Subtract(raw),
                    OperatorTag::Differs => Self::Differs(raw),
                    OperatorTag::Add => Self::Add(raw),
                }
            }
        }
    }
}
