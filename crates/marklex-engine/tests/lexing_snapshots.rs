use marklex_engine::{Grammar, Lexer, preprocess, snapshot};

#[test]
fn fixture_basic_blocks() {
    insta::assert_snapshot!(lex_fixture("basic_blocks"), @r###"
    heading depth=1 "# Title\n" -> "Title"
      plain_text "Title"
    space "\n"
    paragraph "Some *emphasis* and **strong** text.\n" -> "Some *emphasis* and **strong** text."
      plain_text "Some "
      em "*emphasis*" -> "emphasis"
        plain_text "emphasis"
      plain_text " and "
      strong "**strong**" -> "strong"
        plain_text "strong"
      plain_text " text."
    space "\n"
    hr "---\n"
    "###);
}

#[test]
fn fixture_lists() {
    insta::assert_snapshot!(lex_fixture("lists"), @r###"
    list depth=1 "- one\n- two\n  - nested\n"
      list_item depth=1 "- one\n" -> "one\n"
        text "one\n" -> "one"
          plain_text "one"
      list_item depth=1 "- two\n  - nested\n" -> "two\n- nested\n"
        text "two\n" -> "two"
          plain_text "two"
        list depth=2 "- nested\n"
          list_item depth=2 "- nested\n" -> "nested\n"
            text "nested\n" -> "nested"
              plain_text "nested"
    space "\n"
    list depth=1 ordered start=1 loose "1. first\n\n2. second\n"
      list_item depth=1 "1. first\n\n" -> "first\n\n"
        paragraph "first\n" -> "first"
          plain_text "first"
        space "\n"
      list_item depth=1 "2. second\n" -> "second\n"
        paragraph "second\n" -> "second"
          plain_text "second"
    "###);
}

#[test]
fn fixture_quotes_code_links() {
    insta::assert_snapshot!(lex_fixture("quotes_code_links"), @r###"
    blockquote "> quoted *text*\ncontinued\n" -> "quoted *text*\ncontinued\n"
      paragraph "quoted *text*\ncontinued\n" -> "quoted *text*\ncontinued"
        plain_text "quoted "
        em "*text*" -> "text"
          plain_text "text"
        plain_text "\ncontinued"
    space "\n"
    code lang=rust "```rust\nlet x = 1;\n```\n" -> "let x = 1;"
    space "\n"
    def href="https://example.com" title="Home" "[home]: https://example.com \"Home\"\n" -> "home"
    space "\n"
    paragraph "See [home] and `code`.\n" -> "See [home] and `code`."
      plain_text "See "
      link href="https://example.com" title="Home" "[home]" -> "home"
        plain_text "home"
      plain_text " and "
      code_span "`code`" -> "code"
      punctuation "."
    "###);
}

#[test]
fn fixture_edge_cases() {
    insta::assert_snapshot!(lex_fixture("edge_cases"), @r###"
    heading depth=1 "Title\n=====\n" -> "Title"
      plain_text "Title"
    space "\n"
    code "    indented code\n" -> "indented code"
    space "\n"
    paragraph "a <b>tag</b> <https://x.io> \\* done  \nnext\n" -> "a <b>tag</b> <https://x.io> \\* done  \nnext"
      plain_text "a "
      tag "<b>"
      plain_text "tag"
      tag "</b>"
      plain_text " "
      autolink href="https://x.io" "<https://x.io>" -> "https://x.io"
      plain_text " "
      escape "\\*" -> "*"
      plain_text " done"
      line_break "  \n"
      plain_text "next"
    "###);
}

/// Lexes a fixture, checks the lossless-tree rules and renders its outline.
fn lex_fixture(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let src = preprocess(&md);

    let grammar = Grammar::compile().unwrap();
    let doc = Lexer::new(&grammar).lex(&src).unwrap();
    snapshot::invariants(&src, &doc);

    snapshot::outline(&doc.tokens)
}
