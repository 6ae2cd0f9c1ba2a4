//! Segment classification
//!
//! The parser only knows syntactic shapes. Several SKTL constructs that need
//! their own Liquid rendering (loops, partials, filters, ...) look like plain
//! calls or chains, so the converter first assigns every segment a [`Kind`]
//! by inspecting names inside it.

use crate::tables;
use sktl_liquid_ast::{OperatorTag, Segment};
use std::fmt;

/// Conversion kind of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    StringLiteral,
    NumberLiteral,
    Chain,
    CallOrVariable,
    Call,
    Ending,
    Operator(OperatorTag),
    /// Chain ending in `each`
    Loop,
    Else,
    /// `if display_search_form` / `if display_catalog_search_form`
    DisplaySearchForm,
    Partial,
    EnrolledIn,
    AccessCourse,
    Pluralize,
    /// Chain starting from `app('...')`
    App,
    LearningPathItem,
    Filter,
}

impl Kind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::StringLiteral => "string",
            Self::NumberLiteral => "number",
            Self::Chain => "chain",
            Self::CallOrVariable => "call_or_variable",
            Self::Call => "call",
            Self::Ending => "ending",
            Self::Operator(tag) => tag.as_str(),
            Self::Loop => "loop",
            Self::Else => "else",
            Self::DisplaySearchForm => "display_search_form",
            Self::Partial => "partial",
            Self::EnrolledIn => "enrolled_in",
            Self::AccessCourse => "access_course",
            Self::Pluralize => "pluralize",
            Self::App => "app",
            Self::LearningPathItem => "learning_path_item",
            Self::Filter => "filter",
        }
    }

    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// How a top-level segment of this kind is tagged in Liquid
    pub const fn tag_style(&self) -> TagStyle {
        match self {
            Self::Chain | Self::CallOrVariable => TagStyle::Output,
            Self::Call
            | Self::Ending
            | Self::Loop
            | Self::Else
            | Self::Partial
            | Self::Pluralize
            | Self::LearningPathItem
            | Self::DisplaySearchForm => TagStyle::Statement,
            _ => TagStyle::Raw,
        }
    }

    /// Wrap converted top-level text in this kind's Liquid tag
    pub fn wrap(&self, inner: &str) -> String {
        self.tag_style().wrap(inner)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Liquid tag wrapping for converted top-level segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// `{{ ... }}`
    Output,
    /// `{% ... %}`
    Statement,
    /// Emitted as-is
    Raw,
}

impl TagStyle {
    pub fn wrap(&self, inner: &str) -> String {
        match self {
            Self::Output => format!("{{{{ {} }}}}", inner),
            Self::Statement => format!("{{% {} %}}", inner),
            Self::Raw => inner.to_string(),
        }
    }
}

/// Assign a conversion kind to a segment; first matching rule wins
pub fn classify(segment: &Segment) -> Kind {
    match segment {
        Segment::Chain(items) if contains_call(items, "each") => Kind::Loop,
        Segment::CallOrVariable(var) if var.name == "else" => Kind::Else,
        Segment::Call(call) => match call.name.as_str() {
            "if" if is_search_form_condition(call.single_arg()) => Kind::DisplaySearchForm,
            "partial" => Kind::Partial,
            name if tables::ENROLLED_IN_CALLS.contains(&name) => Kind::EnrolledIn,
            tables::ACCESS_COURSE => Kind::AccessCourse,
            "pluralize" => Kind::Pluralize,
            "learning_path_item" => Kind::LearningPathItem,
            name if tables::is_filter(name) => Kind::Filter,
            _ => Kind::Call,
        },
        Segment::Chain(items) if contains_call(items, "app") => Kind::App,
        Segment::CallOrVariable(var) if tables::is_filter(&var.name) => Kind::Filter,
        Segment::Text(_) => Kind::Text,
        Segment::StringLiteral(_) => Kind::StringLiteral,
        Segment::NumberLiteral(_) => Kind::NumberLiteral,
        Segment::Chain(_) => Kind::Chain,
        Segment::CallOrVariable(_) => Kind::CallOrVariable,
        Segment::Ending => Kind::Ending,
        Segment::Operator(op) => Kind::Operator(op.tag),
    }
}

fn contains_call(items: &[Segment], name: &str) -> bool {
    items.iter().any(|item| item.as_call_named(name).is_some())
}

fn is_search_form_condition(arg: Option<&Segment>) -> bool {
    matches!(
        arg,
        Some(Segment::CallOrVariable(var))
            if var.name == "display_search_form" || var.name == "display_catalog_search_form"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Segment::text("<div>"), Kind::Text)]
    #[case(Segment::string("x"), Kind::StringLiteral)]
    #[case(Segment::number("1"), Kind::NumberLiteral)]
    #[case(Segment::path("course.name"), Kind::Chain)]
    #[case(Segment::var("course"), Kind::CallOrVariable)]
    #[case(Segment::var("else"), Kind::Else)]
    #[case(Segment::Ending, Kind::Ending)]
    #[case(Segment::call("t", vec![Segment::string(".hello")]), Kind::Call)]
    #[case(Segment::call("partial", vec![Segment::string("course")]), Kind::Partial)]
    #[case(Segment::call("pluralize", vec![]), Kind::Pluralize)]
    #[case(Segment::call("enrolled_in_course?", vec![Segment::var("course")]), Kind::EnrolledIn)]
    #[case(Segment::call("progress_text", vec![]), Kind::EnrolledIn)]
    #[case(Segment::call("access_course?", vec![Segment::var("course")]), Kind::AccessCourse)]
    #[case(Segment::call("learning_path_item", vec![Segment::var("item")]), Kind::LearningPathItem)]
    #[case(Segment::call("replace", vec![Segment::string("a"), Segment::string("b")]), Kind::Filter)]
    #[case(Segment::var("downcase"), Kind::Filter)]
    #[case(Segment::op(OperatorTag::Differs, Segment::number("0")), Kind::Operator(OperatorTag::Differs))]
    fn test_classify(#[case] segment: Segment, #[case] expected: Kind) {
        assert_eq!(classify(&segment), expected);
    }

    #[test]
    fn test_loop_detected_anywhere_in_chain() {
        let chain = Segment::chain(vec![
            Segment::var("courses"),
            Segment::call("each", vec![Segment::string("course")]),
        ]);
        assert_eq!(classify(&chain), Kind::Loop);
    }

    #[test]
    fn test_loop_wins_over_app() {
        let chain = Segment::chain(vec![
            Segment::call("app", vec![Segment::string("commerce")]),
            Segment::call("each", vec![Segment::string("x")]),
        ]);
        assert_eq!(classify(&chain), Kind::Loop);
    }

    #[test]
    fn test_app_chain() {
        let chain = Segment::chain(vec![
            Segment::call("app", vec![Segment::string("commerce")]),
            Segment::var("active?"),
        ]);
        assert_eq!(classify(&chain), Kind::App);
    }

    #[rstest]
    #[case("display_search_form", Kind::DisplaySearchForm)]
    #[case("display_catalog_search_form", Kind::DisplaySearchForm)]
    #[case("current_person", Kind::Call)]
    fn test_if_condition(#[case] name: &str, #[case] expected: Kind) {
        let segment = Segment::call("if", vec![Segment::var(name)]);
        assert_eq!(classify(&segment), expected);
    }

    #[test]
    fn test_search_form_only_under_if() {
        let segment = Segment::call("unless", vec![Segment::var("display_search_form")]);
        assert_eq!(classify(&segment), Kind::Call);
    }

    #[test]
    fn test_tag_styles() {
        assert_eq!(Kind::Chain.tag_style(), TagStyle::Output);
        assert_eq!(Kind::Else.tag_style(), TagStyle::Statement);
        assert_eq!(Kind::Text.tag_style(), TagStyle::Raw);
        assert_eq!(Kind::App.tag_style(), TagStyle::Raw);
        assert_eq!(TagStyle::Output.wrap("x"), "{{ x }}");
        assert_eq!(TagStyle::Statement.wrap("endif"), "{% endif %}");
        assert_eq!(Kind::Filter.wrap("| downcase"), "| downcase");
        assert_eq!(Kind::Loop.wrap("for a in b"), "{% for a in b %}");
    }
}
