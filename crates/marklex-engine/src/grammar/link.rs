//! Link label, destination and title: the sub-grammar shared by reference
//! definitions and inline links.

use super::Grammar;

/// Byte index of the `]` closing a link label.
///
/// `s` starts just after the opening `[`. Nested brackets, backslash escapes
/// and code spans are skipped so a `]` inside them does not end the label.
pub fn label_end(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => {
                let run = run_len(&bytes[i..], b'`');
                i += match closing_backticks(&s[i + run..], run) {
                    Some(end) => run + end,
                    None => run,
                };
            }
            b'[' => {
                depth += 1;
                i += 1;
            }
            b']' if depth == 0 => return Some(i),
            b']' => {
                depth -= 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Length of the run of `b` at the start of `bytes`.
pub fn run_len(bytes: &[u8], b: u8) -> usize {
    bytes.iter().take_while(|&&c| c == b).count()
}

/// Offset just past the next backtick run of exactly `n` in `s`.
pub fn closing_backticks(s: &str, n: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let run = run_len(&bytes[i..], b'`');
            if run == n {
                return Some(i + run);
            }
            i += run;
        } else {
            i += 1;
        }
    }
    None
}

/// A parsed `(href "title")` tail or definition destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub href: String,
    pub title: Option<String>,
    /// Bytes consumed.
    pub len: usize,
}

impl Grammar {
    /// Parses the part of an inline link after `](`, through the closing `)`.
    ///
    /// The destination is either `<...>` or the longest run of non-space
    /// characters that still leaves a well-formed `title? )` behind it.
    pub fn inline_destination(&self, s: &str) -> Option<Destination> {
        let lead = skip_whitespace(s);
        let body = &s[lead..];

        if body.starts_with('<') {
            let angle = self.href_angle.match_len(body)?;
            let (title, tail) = self.title_then_paren(&body[angle..])?;
            return Some(Destination {
                href: unescape(&body[1..angle - 1]),
                title,
                len: lead + angle + tail,
            });
        }

        let run = body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(body.len());
        let mut cuts: Vec<usize> = body[..run].match_indices(')').map(|(i, _)| i).collect();
        cuts.push(run);
        for &cut in cuts.iter().rev() {
            if let Some((title, tail)) = self.title_then_paren(&body[cut..]) {
                return Some(Destination {
                    href: unescape(&body[..cut]),
                    title,
                    len: lead + cut + tail,
                });
            }
        }
        None
    }

    /// Matches `(?:\s+title)?\s*\)` and returns the title and bytes consumed.
    fn title_then_paren(&self, s: &str) -> Option<(Option<String>, usize)> {
        let ws = skip_whitespace(s);
        if ws > 0
            && let Some(t) = self.title.prefix(&s[ws..])
        {
            let after = ws + t.len();
            let close = skip_whitespace(&s[after..]);
            if s[after + close..].starts_with(')') {
                return Some((Some(strip_title(t)), after + close + 1));
            }
        }
        if s[ws..].starts_with(')') {
            return Some((None, ws + 1));
        }
        None
    }

    /// Parses a definition destination: `<href>` or a non-space run.
    pub fn definition_href<'s>(&self, s: &'s str) -> Option<(String, &'s str)> {
        if s.starts_with('<') {
            let n = self.href_angle.match_len(s)?;
            return Some((unescape(&s[1..n - 1]), &s[n..]));
        }
        let n = s.find(char::is_whitespace).unwrap_or(s.len());
        (n > 0).then(|| (unescape(&s[..n]), &s[n..]))
    }
}

fn skip_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

/// Removes the delimiters of a matched title and its backslash escapes.
pub fn strip_title(t: &str) -> String {
    unescape(&t[1..t.len() - 1])
}

/// Drops the backslash in front of ASCII punctuation.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
