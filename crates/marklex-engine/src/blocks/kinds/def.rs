use crate::{
    blocks::lines::{indent, skip_to_next_token},
    grammar::{
        Grammar,
        link::{label_end, strip_title},
    },
    token::{Token, TokenKind},
};

/// Link reference definitions: `[label]: href "title"`.
pub struct Definition;

impl Definition {
    /// The emitted token carries the label as written in `text`; the caller
    /// registers it under its normalized form.
    pub fn scan(g: &Grammar, s: &str) -> Option<Token> {
        let n = indent(s);
        if n > 3 {
            return None;
        }
        let after_open = s[n..].strip_prefix('[')?;
        let close = label_end(after_open)?;
        let label = &after_open[..close];
        if label.trim().is_empty() {
            return None;
        }
        let rest = after_open[close + 1..].strip_prefix(':')?;
        let (href, tail) = g.definition_href(skip_to_next_token(rest))?;
        let href_end = s.len() - tail.len();

        // The title may sit on the same line or the next one; if what follows
        // the destination is not a valid title, the definition ends there.
        let sep = tail.len() - skip_to_next_token(tail).len();
        if sep > 0
            && let Some(t) = g.title.prefix(&tail[sep..])
            && let Some(eol) = g.def_tail.match_len(&tail[sep + t.len()..])
        {
            let end = href_end + sep + t.len() + eol;
            return Some(
                Token::new(TokenKind::Def, &s[..end], label)
                    .with_link(href, Some(strip_title(t))),
            );
        }

        let eol = g.def_tail.match_len(tail)?;
        Some(Token::new(TokenKind::Def, &s[..href_end + eol], label).with_link(href, None))
    }
}
