use std::fmt::{self, Write};

use crate::token::Token;

/// One line per token, children indented by two spaces:
///
/// ```text
/// heading depth=2 "## Title\n" -> "Title"
///   plain_text "Title"
/// ```
///
/// `raw` is always shown; `text` follows the arrow when it differs.
pub fn outline(tokens: &[Token]) -> String {
    Outline(tokens).to_string().trim_end_matches('\n').to_string()
}

/// [`Display`](fmt::Display) form of a token forest, one line per token.
pub struct Outline<'a>(pub &'a [Token]);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|t| write_token(f, t, 0))
    }
}

fn write_token(out: &mut impl Write, t: &Token, level: usize) -> fmt::Result {
    write!(out, "{}{}", "  ".repeat(level), t.kind.as_str())?;
    if t.depth > 0 {
        write!(out, " depth={}", t.depth)?;
    }
    if let Some(attrs) = t.list {
        if attrs.ordered {
            out.write_str(" ordered")?;
        }
        if let Some(start) = attrs.start {
            write!(out, " start={start}")?;
        }
        if attrs.loose {
            out.write_str(" loose")?;
        }
    }
    if let Some(lang) = &t.lang {
        write!(out, " lang={lang}")?;
    }
    if let Some(href) = &t.href {
        write!(out, " href={href:?}")?;
    }
    if let Some(title) = &t.title {
        write!(out, " title={title:?}")?;
    }
    write!(out, " {:?}", t.raw)?;
    if !t.text.is_empty() && t.text != t.raw {
        write!(out, " -> {:?}", t.text)?;
    }
    out.write_char('\n')?;
    for child in &t.children {
        write_token(out, child, level + 1)?;
    }
    Ok(())
}
