//! # Grammar
//!
//! Every recognizer the lexer uses is built here, once, from small named
//! fragments. Each fragment is anchored at the cursor (`^`), so a match
//! never skips input. Composite rules are assembled in code by running
//! fragments in sequence, which keeps each pattern short enough to read and
//! lets hand-written scanners cover what the regex engine cannot express
//! (balanced brackets, matching backtick runs, closing-fence lengths).
//!
//! A [`Grammar`] is immutable after [`Grammar::compile`] and is shared by
//! every lexing call.

pub mod fragment;
pub mod link;
pub mod rules;

pub use fragment::Fragment;
pub use rules::{BLOCK_PRECEDENCE, BlockRule, INLINE_PRECEDENCE, InlineRule};

use crate::error::GrammarError;

/// Compiled fragments and rule tables.
#[derive(Debug, Clone)]
pub struct Grammar {
    // block
    pub(crate) newline: Fragment,
    pub(crate) indented_code: Fragment,
    pub(crate) fence_open: Fragment,
    pub(crate) heading: Fragment,
    pub(crate) heading_start: Fragment,
    pub(crate) hr: Fragment,
    pub(crate) setext: Fragment,
    pub(crate) bullet: Fragment,
    pub(crate) def_tail: Fragment,
    // shared by def and link
    pub(crate) title: Fragment,
    pub(crate) href_angle: Fragment,
    // inline
    pub(crate) escape: Fragment,
    pub(crate) autolink_scheme: Fragment,
    pub(crate) autolink_email: Fragment,
    pub(crate) tag_open: Fragment,
    pub(crate) tag_attribute: Fragment,
    pub(crate) tag_end: Fragment,
    pub(crate) tag_close: Fragment,
    pub(crate) comment: Fragment,
    pub(crate) processing: Fragment,
    pub(crate) declaration: Fragment,
    pub(crate) cdata: Fragment,
    pub(crate) line_break: Fragment,

    block_rules: [BlockRule; 11],
    inline_rules: [InlineRule; 11],
}

impl Grammar {
    /// Builds every fragment. Fails on the first fragment that does not
    /// compile, naming it.
    pub fn compile() -> Result<Self, GrammarError> {
        let grammar = Self {
            newline: Fragment::compile("newline", r"^\n+")?,
            indented_code: Fragment::compile("indented_code", r"^(?: {4}[^\n]+\n*)+")?,
            fence_open: Fragment::compile("fence_open", r"^( {0,3})(`{3,}|~{3,})([^\n]*)(?:\n|$)")?,
            heading: Fragment::compile(
                "heading",
                r"^ {0,3}(#{1,6})(?: +([^\n]*?))?(?: +#+)? *(?:\n|$)",
            )?,
            heading_start: Fragment::compile("heading_start", r"^ {0,3}#{1,6}(?: |\n|$)")?,
            hr: Fragment::compile(
                "hr",
                r"^ {0,3}(?:(?:- *){3,}|(?:_ *){3,}|(?:\* *){3,})(?:\n|$)",
            )?,
            setext: Fragment::compile("setext", r"^([^\n]+)\n {0,3}(=+|-+) *(?:\n|$)")?,
            bullet: Fragment::compile("bullet", r"^(?:[*+-]|\d{1,9}[.)])")?,
            def_tail: Fragment::compile("def_tail", r"^ *(?:\n|$)")?,
            title: Fragment::compile(
                "title",
                r#"^(?:"(?:\\"?|[^"\\])*"|'(?:\\'?|[^'\\])*'|\((?:\\\)?|[^)\\])*\))"#,
            )?,
            href_angle: Fragment::compile("href_angle", r"^<(?:\\[<>]?|[^\n<>\\])*>")?,
            escape: Fragment::compile("escape", r##"^\\[!"#$%&'()*+,\-./:;<=>?@\[\]\\^_`{|}~]"##)?,
            autolink_scheme: Fragment::compile(
                "autolink_scheme",
                r"^[a-zA-Z][a-zA-Z0-9+.\-]{1,31}:[^\s\x00-\x1f<>]*",
            )?,
            autolink_email: Fragment::compile(
                "autolink_email",
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*",
            )?,
            tag_open: Fragment::compile("tag_open", r"^<[a-zA-Z][a-zA-Z0-9\-]*")?,
            tag_attribute: Fragment::compile(
                "tag_attribute",
                r#"^\s+[a-zA-Z:_][a-zA-Z0-9_.:\-]*(?:\s*=\s*"[^"]*"|\s*=\s*'[^']*'|\s*=\s*[^\s"'=<>`]+)?"#,
            )?,
            tag_end: Fragment::compile("tag_end", r"^\s*/?>")?,
            tag_close: Fragment::compile("tag_close", r"^</[a-zA-Z][a-zA-Z0-9\-]*\s*>")?,
            comment: Fragment::compile("comment", r"^<!--[\s\S]*?-->")?,
            processing: Fragment::compile("processing", r"^<\?[\s\S]*?\?>")?,
            declaration: Fragment::compile("declaration", r"^<![a-zA-Z]+\s[^>]*>")?,
            cdata: Fragment::compile("cdata", r"^<!\[CDATA\[[\s\S]*?\]\]>")?,
            line_break: Fragment::compile("line_break", r"^(?: {2,}|\\)\n")?,

            block_rules: BLOCK_PRECEDENCE,
            inline_rules: INLINE_PRECEDENCE,
        };
        log::debug!(
            "compiled grammar: {} block rules, {} inline rules",
            grammar.block_rules.len(),
            grammar.inline_rules.len()
        );
        Ok(grammar)
    }

    /// Block rules in the order they are tried.
    pub fn block_rules(&self) -> &[BlockRule] {
        &self.block_rules
    }

    /// Inline rules in the order they are tried.
    pub fn inline_rules(&self) -> &[InlineRule] {
        &self.inline_rules
    }
}
