//! Fixed rewrite tables
//!
//! The membership of every table here is tied to the school website content
//! model and is reproduced exactly; none of these are meant to be extended
//! by pattern.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Condition arguments that name a collection; `if courses` becomes
/// `if courses.any?`
pub const ARRAY_EMPTY_CHECK_EXPRESSIONS: [&str; 9] = [
    "courses",
    "course.instructors",
    "course.partnerships",
    "learning_path.instructors",
    "homepage.published_featured_courses",
    "learning_path.items",
    "current_person.filterable_catalog_categories",
    "current_person.filterable_learning_path_categories",
    "current_person.filterable_categories",
];

/// Condition arguments that name a person; `if current_person` becomes
/// `if current_person.signed_in?`
pub const SIGNED_IN_CHECK_EXPRESSIONS: [&str; 2] = ["current_person", "current_learner"];

/// Method names converted to Liquid filters
pub const FILTERS: [&str; 3] = ["replace", "truncate_words", "downcase"];

/// Call names whose arguments are dropped in Liquid
pub const ENROLLED_IN_CALLS: [&str; 3] =
    ["enrolled_in_learning_path?", "enrolled_in_course?", "progress_text"];

/// Deprecated alias and the name it was folded into
pub const ACCESS_COURSE: &str = "access_course?";
pub const ACCESS_COURSE_REPLACEMENT: &str = "enrolled_in_course?";

/// Operator glyphs whose string operand gets single-quoted
pub const QUOTED_OPERAND_GLYPHS: [&str; 4] = ["=", "-", "+", "!="];

static OPERATOR_TOKENS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("|", "or"),
        ("&", "and"),
        ("=", "=="),
        ("-", "| minus:"),
        ("+", "| plus:"),
        ("!=", "!="),
        (">", ">"),
        ("<", "<"),
    ])
});

static FILTER_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([("replace", "replace"), ("truncate_words", "truncatewords")])
});

/// Liquid token for an SKTL operator glyph
pub fn operator_token(glyph: &str) -> Option<&'static str> {
    OPERATOR_TOKENS.get(glyph).copied()
}

/// Liquid filter name for an SKTL method; unmapped names pass through
pub fn filter_name(name: &str) -> &str {
    FILTER_NAMES.get(name).copied().unwrap_or(name)
}

pub fn is_filter(name: &str) -> bool {
    FILTERS.contains(&name)
}

pub fn is_array_empty_check(args: &str) -> bool {
    ARRAY_EMPTY_CHECK_EXPRESSIONS.contains(&args)
}

pub fn is_signed_in_check(args: &str) -> bool {
    SIGNED_IN_CHECK_EXPRESSIONS.contains(&args)
}

pub fn quotes_string_operand(glyph: &str) -> bool {
    QUOTED_OPERAND_GLYPHS.contains(&glyph)
}
