use crate::{
    blocks::{kinds::paragraph::Paragraph, lines::indent},
    grammar::Grammar,
};

/// A blockquote's extent and its text with the markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteMatch<'s> {
    pub raw: &'s str,
    pub inner: String,
}

pub struct BlockQuote;

impl BlockQuote {
    pub const MARKER: char = '>';

    /// Returns the line content after `>` and one optional space, if the
    /// line is a marker line.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let n = indent(line);
        if n > 3 {
            return None;
        }
        let rest = line[n..].strip_prefix(Self::MARKER)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }

    /// Consecutive marker lines. After a marker line holding paragraph text,
    /// unmarked non-blank lines that would not interrupt a paragraph are
    /// taken too (lazy continuation) and kept as written.
    pub fn scan<'s>(g: &Grammar, s: &'s str) -> Option<QuoteMatch<'s>> {
        let mut end = 0;
        let mut inner = String::new();
        let mut lazy = false;
        for line in s.split_inclusive('\n') {
            let body = line.strip_suffix('\n').unwrap_or(line);
            if let Some(content) = Self::strip_marker(body) {
                inner.push_str(content);
                if line.ends_with('\n') {
                    inner.push('\n');
                }
                lazy = !content.trim().is_empty() && !Paragraph::interrupted_by(g, content);
            } else if lazy && !body.is_empty() && !Paragraph::interrupted_by(g, body) {
                inner.push_str(line);
            } else {
                break;
            }
            end += line.len();
        }
        (end > 0).then(|| QuoteMatch {
            raw: &s[..end],
            inner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn grammar() -> Grammar {
        Grammar::compile().unwrap()
    }

    #[rstest]
    fn strips_markers(grammar: Grammar) {
        let q = BlockQuote::scan(&grammar, "> a\n>b\n>\n> c\n\nafter").unwrap();
        assert_eq!(q.raw, "> a\n>b\n>\n> c\n");
        assert_eq!(q.inner, "a\nb\n\nc\n");
    }

    #[rstest]
    fn takes_lazy_paragraph_lines(grammar: Grammar) {
        let q = BlockQuote::scan(&grammar, "> a\n  lazy\n# h\n").unwrap();
        assert_eq!(q.raw, "> a\n  lazy\n");
        assert_eq!(q.inner, "a\n  lazy\n");
    }

    #[rstest]
    fn no_lazy_after_empty_marker_line(grammar: Grammar) {
        let q = BlockQuote::scan(&grammar, ">\nnot quoted\n").unwrap();
        assert_eq!(q.raw, ">\n");
    }

    #[rstest]
    fn needs_a_marker(grammar: Grammar) {
        assert!(BlockQuote::scan(&grammar, "    > code\n").is_none());
        assert!(BlockQuote::scan(&grammar, "text\n").is_none());
    }

    #[test]
    fn nested_marker_survives_one_strip() {
        assert_eq!(BlockQuote::strip_marker("> > x"), Some("> x"));
        assert_eq!(BlockQuote::strip_marker("   >x"), Some("x"));
    }
}
