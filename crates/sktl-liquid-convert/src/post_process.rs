//! Literal rewrites applied to the finished Liquid document
//!
//! These cover idioms from existing school templates that have no
//! structural translation. Patterns match the converter's exact output,
//! spacing and quoting included.

/// `(pattern, replacement)` pairs, applied in order
pub const REWRITES: [(&str, &str); 2] = [
    (
        "{{ course.progress_text | minus: ' Complete' }}",
        "{{ course.progress }}%",
    ),
    (
        r#"class="{{ no_filter_selected_class }}""#,
        r#"class="uk-text-bold""#,
    ),
];

/// Apply every literal rewrite to the whole document
pub fn post_process(liquid: &str) -> String {
    REWRITES
        .iter()
        .fold(liquid.to_string(), |text, &(pattern, replacement)| {
            text.replace(pattern, replacement)
        })
}
