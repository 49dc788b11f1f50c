use crate::{
    grammar::Grammar,
    token::{Token, TokenKind},
};

pub struct Heading;

impl Heading {
    /// `#` to `######` followed by a space or the end of the line. An
    /// optional closing run of `#` is dropped from the text.
    pub fn atx(g: &Grammar, s: &str) -> Option<Token> {
        let caps = g.heading.captures(s)?;
        let raw = caps.get(0)?.as_str();
        let level = caps.get(1)?.as_str().len();
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        Some(Token::new(TokenKind::Heading, raw, text).with_depth(level))
    }

    /// A text line underlined with `=` (level 1) or `-` (level 2).
    pub fn setext(g: &Grammar, s: &str) -> Option<Token> {
        let caps = g.setext.captures(s)?;
        let raw = caps.get(0)?.as_str();
        let text = caps.get(1)?.as_str().trim();
        let level = if caps.get(2)?.as_str().starts_with('=') {
            1
        } else {
            2
        };
        Some(Token::new(TokenKind::Heading, raw, text).with_depth(level))
    }
}

pub struct ThematicBreak;

impl ThematicBreak {
    pub fn scan(g: &Grammar, s: &str) -> Option<Token> {
        g.hr.prefix(s).map(|raw| Token::new(TokenKind::Hr, raw, ""))
    }
}
