//! Property-based tests for conversion invariants

mod common;

use common::*;
use proptest::prelude::*;
use sktl_liquid::Segment;
use sktl_liquid::convert::tables;

/// Identifiers that convert as plain path components
fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}[?]?".prop_filter("filters and block keywords convert differently", |name| {
        !tables::is_filter(name)
            && !matches!(name.as_str(), "else" | "each" | "app")
    })
}

/// Text that cannot trip the post-processing rewrites
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>/=\"\n-]{0,40}"
}

proptest! {
    #[test]
    fn chain_keeps_component_order(names in prop::collection::vec(identifier(), 1..6)) {
        let chain = Segment::chain(names.iter().map(Segment::var).collect());
        let liquid = convert_ok(vec![chain]);

        prop_assert_eq!(liquid, format!("{{{{ {} }}}}", names.join(".")));
    }

    #[test]
    fn text_passes_through(texts in prop::collection::vec(plain_text(), 0..5)) {
        let liquid = convert_ok(texts.iter().map(Segment::text).collect());
        prop_assert_eq!(liquid, texts.concat());
    }

    #[test]
    fn condition_suffix_only_for_listed_expressions(
        names in prop::collection::vec(identifier(), 1..4),
        negated in any::<bool>(),
    ) {
        let path = names.join(".");
        let keyword = if negated { "unless" } else { "if" };
        let liquid = convert_ok(vec![Segment::call(keyword, vec![Segment::path(&path)])]);

        let expected = if tables::is_array_empty_check(&path) {
            format!("{{% {keyword} {path}.any? %}}")
        } else if tables::is_signed_in_check(&path) {
            format!("{{% {keyword} {path}.signed_in? %}}")
        } else {
            format!("{{% {keyword} {path} %}}")
        };
        prop_assert_eq!(liquid, expected);
    }

    #[test]
    fn balanced_blocks_close_innermost_first(
        blocks in prop::collection::vec(prop_oneof![Just("if"), Just("unless"), Just("for")], 0..6),
    ) {
        let mut segments: Vec<Segment> = blocks
            .iter()
            .map(|block| match *block {
                "for" => each("items", "item"),
                keyword => Segment::call(keyword, vec![Segment::var("flag")]),
            })
            .collect();
        segments.extend(blocks.iter().map(|_| Segment::Ending));

        let liquid = convert_ok(segments);
        let closing: String = blocks
            .iter()
            .rev()
            .map(|block| format!("{{% end{} %}}", block))
            .collect();
        prop_assert!(liquid.ends_with(&closing));
    }

    #[test]
    fn one_end_too_many_is_an_error(depth in 0usize..5) {
        let mut segments: Vec<Segment> = (0..depth).map(|_| if_(Segment::var("flag"))).collect();
        segments.extend((0..=depth).map(|_| Segment::Ending));

        prop_assert_eq!(convert_err(segments), sktl_liquid::ConvertError::UnbalancedScope);
    }
}
