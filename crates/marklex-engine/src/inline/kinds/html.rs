use crate::grammar::Grammar;

/// Inline raw HTML: comments, processing instructions, CDATA, declarations,
/// closing tags and open tags with attributes.
pub struct RawHtml;

impl RawHtml {
    /// Length of the raw HTML at the start of `s`.
    pub fn scan(g: &Grammar, s: &str) -> Option<usize> {
        if !s.starts_with('<') {
            return None;
        }
        if let Some(n) = g.comment.match_len(s) {
            // `<!-->` and `<!--->` are not comments.
            let body = &s[4..n - 3];
            return (!body.starts_with('>') && !body.starts_with("->")).then_some(n);
        }
        [&g.processing, &g.cdata, &g.declaration, &g.tag_close]
            .iter()
            .find_map(|f| f.match_len(s))
            .or_else(|| Self::open_tag(g, s))
    }

    fn open_tag(g: &Grammar, s: &str) -> Option<usize> {
        let mut n = g.tag_open.match_len(s)?;
        while let Some(a) = g.tag_attribute.match_len(&s[n..]) {
            n += a;
        }
        Some(n + g.tag_end.match_len(&s[n..])?)
    }
}
