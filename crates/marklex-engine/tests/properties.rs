//! Property-based tests for the lexer as a whole:
//! - every input lexes without error and the token tree reproduces it
//! - preprocessing is idempotent

use std::sync::LazyLock;

use marklex_engine::{Grammar, Lexer, preprocess, snapshot};
use proptest::prelude::*;

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| Grammar::compile().unwrap());

/// One line that is likely to start or interrupt some block construct.
fn markdown_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}",
        "#{1,7} [a-z*_]{0,8}",
        " {0,4}[-*+] [a-z*_`]{0,8}",
        " {0,5}[0-9]{1,3}[.)] [a-z]{0,6}",
        "> {0,2}[a-z>*_ ]{0,10}",
        "(```|~~~)[a-z]{0,4}",
        "[-=*_ ]{1,8}",
        "\\[[a-z]{1,3}\\]: ?[a-z/<>]{0,6}( \"[a-z]{0,3}\")?",
        "[a-z*_`\\[\\]()!<>\\\\/:@. \t]{0,20}",
        "[é漢\u{a0}a-z*_ ]{0,6}",
    ]
}

fn markdown_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

fn assert_lossless(input: &str) {
    let src = preprocess(input);
    let doc = Lexer::new(&GRAMMAR).lex(&src).unwrap();
    snapshot::invariants(&src, &doc);
}

proptest! {
    #[test]
    fn markdown_like_documents_round_trip(doc in markdown_document()) {
        assert_lossless(&doc);
    }

    #[test]
    fn arbitrary_text_round_trips(text in "\\PC{0,64}(\n\\PC{0,32}){0,4}") {
        assert_lossless(&text);
    }

    #[test]
    fn preprocess_is_idempotent(text in "[ \t\r\na-z>#-]{0,48}") {
        let once = preprocess(&text);
        prop_assert_eq!(preprocess(&once), once);
    }

    #[test]
    fn preprocessed_text_has_no_tabs_or_carriage_returns(text in "[ \t\r\na-z]{0,48}") {
        let out = preprocess(&text);
        prop_assert!(!out.contains('\t'));
        prop_assert!(!out.contains('\r'));
    }
}
