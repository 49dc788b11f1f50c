use crate::{
    blocks::{
        kinds::{block_quote::BlockQuote, code::CodeFence},
        lines::{first_line, indent},
    },
    grammar::Grammar,
    token::{Token, TokenKind},
};

pub struct Paragraph;

impl Paragraph {
    /// Consecutive non-blank lines, stopping before a line that starts a
    /// block able to interrupt a paragraph.
    pub fn scan(g: &Grammar, s: &str) -> Option<Token> {
        let (first, mut end) = first_line(s);
        if first.is_empty() {
            return None;
        }
        while end < s.len() {
            let (line, len) = first_line(&s[end..]);
            if line.is_empty() || Self::interrupted_by(g, line) {
                break;
            }
            end += len;
        }

        let raw = &s[..end];
        let text = raw
            .trim_end_matches('\n')
            .split('\n')
            .map(|l| l.trim_start_matches(' '))
            .collect::<Vec<_>>()
            .join("\n");
        Some(Token::new(TokenKind::Paragraph, raw, text))
    }

    /// Thematic breaks, ATX headings, blockquotes, fences, and list items
    /// that are bulleted or start at 1 end a paragraph without a blank line.
    pub fn interrupted_by(g: &Grammar, line: &str) -> bool {
        g.hr.is_match(line)
            || g.heading_start.is_match(line)
            || BlockQuote::strip_marker(line).is_some()
            || CodeFence::open(g, line).is_some()
            || Self::opens_list(g, line)
    }

    fn opens_list(g: &Grammar, line: &str) -> bool {
        let n = indent(line);
        if n > 3 {
            return false;
        }
        let after = &line[n..];
        let Some(bullet) = g.bullet.prefix(after) else {
            return false;
        };
        let unordered_or_first = bullet.len() == 1 || bullet == "1." || bullet == "1)";
        unordered_or_first && after[bullet.len()..].starts_with(' ')
    }
}

/// A single line of plain text, the fallback when nothing else matches.
/// Consecutive text lines are merged by the block loop.
pub struct TextLine;

impl TextLine {
    pub fn scan(s: &str) -> Option<Token> {
        let (line, len) = first_line(s);
        if line.is_empty() {
            return None;
        }
        Some(Token::new(TokenKind::Text, &s[..len], line))
    }
}
