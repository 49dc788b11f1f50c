use crate::{
    grammar::Grammar,
    token::{Token, TokenKind},
};

pub struct Autolink;

impl Autolink {
    pub const MAILTO: &'static str = "mailto:";

    /// `<scheme:rest>` or `<user@host>`.
    pub fn scan(g: &Grammar, s: &str) -> Option<Token> {
        let inner = s.strip_prefix('<')?;
        let (n, href) = if let Some(n) = g.autolink_scheme.match_len(inner)
            && inner[n..].starts_with('>')
        {
            (n, inner[..n].to_string())
        } else {
            let n = g.autolink_email.match_len(inner)?;
            if !inner[n..].starts_with('>') {
                return None;
            }
            (n, format!("{}{}", Self::MAILTO, &inner[..n]))
        };
        Some(Token::new(TokenKind::Autolink, &s[..n + 2], &inner[..n]).with_link(href, None))
    }
}
