use crate::{
    grammar::{Grammar, link::label_end},
    links::LinkRefs,
    token::TokenKind,
};

/// A recognized link or image, before its label is tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'s> {
    pub kind: TokenKind,
    pub label: &'s str,
    pub href: String,
    pub title: Option<String>,
    pub len: usize,
}

/// Outcome of trying a reference link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference<'s> {
    Resolved(LinkMatch<'s>),
    /// Well-formed brackets whose label has no definition.
    Unresolved,
}

pub struct Link;

impl Link {
    pub const IMAGE_PREFIX: char = '!';

    /// Splits off an optional `!` and the bracketed label.
    /// Returns `(kind, label, bytes consumed through the closing bracket)`.
    fn bracketed(s: &str) -> Option<(TokenKind, &str, usize)> {
        let (kind, body) = match s.strip_prefix(Self::IMAGE_PREFIX) {
            Some(rest) => (TokenKind::Image, rest),
            None => (TokenKind::Link, s),
        };
        let after = body.strip_prefix('[')?;
        let close = label_end(after)?;
        let consumed = s.len() - body.len() + 1 + close + 1;
        Some((kind, &after[..close], consumed))
    }

    /// `[label](href "title")` or `![alt](src "title")`.
    pub fn inline<'s>(g: &Grammar, s: &'s str) -> Option<LinkMatch<'s>> {
        let (kind, label, n) = Self::bracketed(s)?;
        let tail = s[n..].strip_prefix('(')?;
        let dest = g.inline_destination(tail)?;
        Some(LinkMatch {
            kind,
            label,
            href: dest.href,
            title: dest.title,
            len: n + 1 + dest.len,
        })
    }

    /// Full `[text][label]`, collapsed `[label][]` and shortcut `[label]`
    /// references, looked up in `links`.
    pub fn reference<'s>(s: &'s str, links: &LinkRefs) -> Option<Reference<'s>> {
        let (kind, label, n) = Self::bracketed(s)?;
        let (key, len) = match s[n..].strip_prefix('[').and_then(|r| Some((r, label_end(r)?))) {
            Some((_, 0)) => (label, n + 2),
            Some((r, close)) => (&r[..close], n + 1 + close + 1),
            None => (label, n),
        };
        Some(match links.resolve(key) {
            Some(found) => Reference::Resolved(LinkMatch {
                kind,
                label,
                href: found.href.clone(),
                title: found.title.clone(),
                len,
            }),
            None => Reference::Unresolved,
        })
    }
}
