use crate::{
    grammar::link::{closing_backticks, run_len},
    token::{Token, TokenKind},
};

pub struct CodeSpan;

impl CodeSpan {
    pub const DELIMITER: u8 = b'`';

    /// A backtick run closed by the next run of exactly the same length.
    pub fn scan(s: &str) -> Option<Token> {
        let n = run_len(s.as_bytes(), Self::DELIMITER);
        if n == 0 {
            return None;
        }
        let close = closing_backticks(&s[n..], n)?;
        let raw = &s[..n + close];
        let content = &s[n..n + close - n];
        Some(Token::new(TokenKind::CodeSpan, raw, Self::normalize(content)))
    }

    /// Line endings become spaces; one space is stripped from each side when
    /// both are present and the content is not all spaces.
    fn normalize(content: &str) -> String {
        let c = content.replace('\n', " ");
        let padded = c.len() >= 2 && c.starts_with(' ') && c.ends_with(' ');
        if padded && !c.bytes().all(|b| b == b' ') {
            c[1..c.len() - 1].to_string()
        } else {
            c
        }
    }
}
