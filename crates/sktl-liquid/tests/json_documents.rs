//! Conversion of documents decoded from the SKTL parser's JSON output

use pretty_assertions::assert_eq;
use rstest::rstest;
use sktl_liquid::diagnostics::{ErrorCode, SKL0002, SKL0003};
use sktl_liquid::{Segment, Template, convert_document};

fn convert_json(json: &str) -> String {
    let template = Template::from_json(json).expect("Failed to decode template");
    convert_document(&template).expect("Failed to convert template")
}

#[test]
fn test_course_card() {
    let json = r#"{"template": [
        {"chain": [
            {"call_or_variable": {"name": "courses"}},
            {"call": {"name": "each", "args": {"string": "course"}}}
        ]},
        {"text": "\n  <h3>"},
        {"chain": [
            {"call_or_variable": {"name": "course"}},
            {"call_or_variable": {"name": "name"}},
            {"call_or_variable": {"name": "downcase"}}
        ]},
        {"text": "</h3>\n  "},
        {"call": {"name": "if", "args": {"chain": [
            {"call_or_variable": {"name": "current_person"}},
            {"call": {"name": "enrolled_in_course?", "args": {"call_or_variable": {"name": "course"}}}}
        ]}}},
        {"text": "<span>"},
        {"call": {"name": "t", "args": {"string": ".enrolled"}}},
        {"text": "</span>"},
        {"call_or_variable": {"name": "else"}},
        {"call": {"name": "partial", "args": {"string": "enroll_button"}}},
        "ending",
        {"text": "\n"},
        "ending",
        {"text": "\n"}
    ]}"#;

    assert_eq!(
        convert_json(json),
        "{% for course in courses %}\n  <h3>{{ course.name | downcase }}</h3>\n  \
         {% if current_person.enrolled_in_course? %}<span>{% t .enrolled %}</span>\
         {% else %}{% include \"enroll_button\" %}{% endif %}\n{% endfor %}\n"
    );
}

#[test]
fn test_operators_from_parser_shape() {
    let json = r#"{"template": [
        {"call": {"name": "if", "args": {"chain": [
            {"call_or_variable": {"name": "course"}},
            {"call_or_variable": {"name": "price"}},
            {"greater": {"op": "> ", "arg": {"number": "0"}}},
            {"and": {"op": "& ", "arg": {"call_or_variable": {"name": "current_person"}}}}
        ]}}},
        {"chain": [
            {"call_or_variable": {"name": "course"}},
            {"call_or_variable": {"name": "price"}},
            {"add": {"op": "+ ", "arg": {"number": "5"}}}
        ]},
        "ending"
    ]}"#;

    assert_eq!(
        convert_json(json),
        "{% if course.price > 0 and current_person %}{{ course.price | plus: 5 }}{% endif %}"
    );
}

#[test]
fn test_call_with_argument_list() {
    let json = r#"{"template": [
        {"chain": [
            {"call_or_variable": {"name": "course"}},
            {"call_or_variable": {"name": "enrollment_url"}},
            {"call": {"name": "replace", "args": [{"string": "catalog"}, {"string": "syllabus"}]}}
        ]}
    ]}"#;

    assert_eq!(
        convert_json(json),
        r#"{{ course.enrollment_url | replace: "catalog", "syllabus" }}"#
    );
}

#[test]
fn test_homepage_featured_courses() {
    let json = r#"{"template": [
        {"call": {"name": "if", "args": {"chain": [
            {"call_or_variable": {"name": "homepage"}},
            {"call_or_variable": {"name": "published_featured_courses"}}
        ]}}},
        {"call": {"name": "pluralize", "args": [
            {"chain": [
                {"call_or_variable": {"name": "homepage"}},
                {"call_or_variable": {"name": "published_featured_courses"}},
                {"call_or_variable": {"name": "count"}}
            ]},
            {"call": {"name": "t", "args": {"string": ".featured.one"}}},
            {"call": {"name": "t", "args": {"string": ".featured.many"}}}
        ]}},
        "ending"
    ]}"#;

    assert_eq!(
        convert_json(json),
        "{% if homepage.published_featured_courses.any? %}\
         {% pluralize homepage.published_featured_courses.count, .featured %}{% endif %}"
    );
}

#[test]
fn test_decoded_template_survives_reencoding() {
    let json = r#"{"template":[{"text":"<p>"},{"chain":[{"call_or_variable":{"name":"a"}},{"differs":{"op":"!= ","arg":{"string":"b"}}}]},"ending"]}"#;
    let template = Template::from_json(json).unwrap();

    assert_eq!(serde_json::to_string(&template).unwrap(), json);
}

#[test]
fn test_empty_template() {
    assert_eq!(convert_json(r#"{"template": []}"#), "");
}

#[rstest]
#[case::stray_end(r#"{"template": [{"text": "x"}, "ending"]}"#, SKL0003)]
#[case::partial_without_name(r#"{"template": [{"call": {"name": "partial"}}]}"#, SKL0002)]
#[case::app_with_variable(
    r#"{"template": [{"chain": [{"call": {"name": "app", "args": {"call_or_variable": {"name": "x"}}}}]}]}"#,
    SKL0002
)]
#[case::pluralize_one_arg(
    r#"{"template": [{"call": {"name": "pluralize", "args": {"number": "1"}}}]}"#,
    SKL0002
)]
fn test_conversion_errors(#[case] json: &str, #[case] code: ErrorCode) {
    let template = Template::from_json(json).unwrap();
    let err = convert_document(&template).unwrap_err();
    assert_eq!(err.code(), code);
}

#[test]
fn test_unknown_operator_glyph_is_reported_with_segment() {
    let json = r#"{"template": [{"equals": {"op": "== ", "arg": {"number": "1"}}}]}"#;
    let template = Template::from_json(json).unwrap();
    let err = convert_document(&template).unwrap_err();

    assert_eq!(err.code(), SKL0002);
    assert!(matches!(err.segment(), Some(Segment::Operator(_))));
}
