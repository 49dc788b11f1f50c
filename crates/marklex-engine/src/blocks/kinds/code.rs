use crate::{
    blocks::lines::{first_line, indent, strip_spaces},
    grammar::{
        Grammar,
        link::{run_len, unescape},
    },
    token::{Token, TokenKind},
};

/// Code indented by four or more spaces.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: &'static str = "    ";

    /// Matches a run of indented lines, with the blank lines between them.
    /// Trailing blank lines are left for the newline rule.
    pub fn scan(g: &Grammar, s: &str) -> Option<Token> {
        let m = g.indented_code.prefix(s)?;
        let content = m.trim_end_matches('\n');
        let raw = &m[..(content.len() + 1).min(m.len())];
        let text = content
            .split('\n')
            .map(|l| l.strip_prefix(Self::INDENT).unwrap_or(l))
            .collect::<Vec<_>>()
            .join("\n");
        Some(Token::new(TokenKind::Code, raw, text))
    }
}

/// An opening fence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceOpen<'s> {
    pub indent: usize,
    pub marker: u8,
    pub len: usize,
    pub info: &'s str,
    /// Length of the opening line including its terminator.
    pub line_len: usize,
}

/// Fenced code blocks, opened by three or more backticks or tildes.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;

    pub fn open<'s>(g: &Grammar, s: &'s str) -> Option<FenceOpen<'s>> {
        let caps = g.fence_open.captures(s)?;
        let fence = caps.get(2)?.as_str();
        let info = caps.get(3).map_or("", |m| m.as_str());
        let marker = fence.as_bytes()[0];
        // A backtick fence's info string cannot itself contain a backtick,
        // otherwise the line is an inline code span.
        if marker == Self::BACKTICK && info.contains('`') {
            return None;
        }
        Some(FenceOpen {
            indent: caps.get(1).map_or(0, |m| m.as_str().len()),
            marker,
            len: fence.len(),
            info,
            line_len: caps.get(0)?.end(),
        })
    }

    /// A closing fence: up to three spaces, at least as many fence characters
    /// as the opener, then nothing but spaces.
    pub fn closes(open: &FenceOpen<'_>, line: &str) -> bool {
        let n = indent(line);
        if n > 3 {
            return false;
        }
        let rest = &line[n..];
        let run = run_len(rest.as_bytes(), open.marker);
        run >= open.len && rest[run..].bytes().all(|b| b == b' ')
    }

    /// Matches a whole fenced block. An unterminated fence runs to the end
    /// of the input.
    pub fn scan(g: &Grammar, s: &str) -> Option<Token> {
        let open = Self::open(g, s)?;
        let mut pos = open.line_len;
        let mut end = s.len();
        let mut body = Vec::new();
        while pos < s.len() {
            let (line, len) = first_line(&s[pos..]);
            if Self::closes(&open, line) {
                end = pos + len;
                break;
            }
            body.push(strip_spaces(line, open.indent));
            pos += len;
        }

        let mut token = Token::new(TokenKind::Code, &s[..end], body.join("\n"));
        token.lang = open.info.split_whitespace().next().map(unescape);
        Some(token)
    }
}
