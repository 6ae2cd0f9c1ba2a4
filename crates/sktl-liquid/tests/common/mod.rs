//! Common test utilities for conversion testing
//!
//! Builders for the segment shapes the SKTL parser emits, and helpers for
//! converting whole documents.

#![allow(dead_code)]

use sktl_liquid::ast::{Operator, OperatorTag};
use sktl_liquid::{ConvertError, Segment, Template, convert_document};

/// Convert a document and expect success
#[track_caller]
pub fn convert_ok(segments: Vec<Segment>) -> String {
    convert_document(&Template::new(segments))
        .unwrap_or_else(|e| panic!("Failed to convert document: {}", e))
}

/// Convert a document and expect failure
#[track_caller]
pub fn convert_err(segments: Vec<Segment>) -> ConvertError {
    match convert_document(&Template::new(segments)) {
        Ok(liquid) => panic!("Expected conversion error but got: {:?}", liquid),
        Err(e) => e,
    }
}

/// `{{ <path>.each '<variable>' }}`
pub fn each(path: &str, variable: &str) -> Segment {
    let mut items: Vec<Segment> = path.split('.').map(Segment::var).collect();
    items.push(Segment::call("each", vec![Segment::string(variable)]));
    Segment::chain(items)
}

/// `{{ if <arg> }}`
pub fn if_(arg: Segment) -> Segment {
    Segment::call("if", vec![arg])
}

/// `{{ unless <arg> }}`
pub fn unless(arg: Segment) -> Segment {
    Segment::call("unless", vec![arg])
}

/// `t('<key>')`
pub fn t(key: &str) -> Segment {
    Segment::call("t", vec![Segment::string(key)])
}

/// Operator as the parser records it, glyph followed by a space
pub fn op(tag: OperatorTag, arg: Segment) -> Segment {
    Segment::Operator(Operator::with_glyph(tag, format!("{} ", tag.glyph()), arg))
}

/// Chain of a dotted path followed by extra segments
pub fn path_then(path: &str, rest: Vec<Segment>) -> Segment {
    let mut items: Vec<Segment> = path.split('.').map(Segment::var).collect();
    items.extend(rest);
    Segment::chain(items)
}
