//! # Inline tokenizer
//!
//! Runs over the `text` of every heading, paragraph and text block once the
//! whole block pass is done. Scanning tries the inline rules in precedence
//! order at the cursor. Escapes, raw HTML, autolinks, links and code spans
//! are emitted whole, so nothing inside them is ever seen as a delimiter.
//! `*` and `_` runs are collected as [`DelimiterRun`]s and paired afterwards
//! by [`emphasis::resolve`].

pub mod emphasis;
pub mod kinds;

use crate::{
    cursor::Cursor,
    error::LexError,
    grammar::{InlineRule, link::run_len},
    lexer::Session,
    token::{Token, TokenKind, count_tokens},
};

use emphasis::{DelimiterRun, Node};
use kinds::{Autolink, CodeSpan, Link, LinkMatch, RawHtml, Reference};

/// Fills in the inline children of every text-bearing token in a block
/// tree.
pub(crate) fn tokenize_tree(session: &mut Session<'_>, token: &mut Token) -> Result<(), LexError> {
    if token.kind.carries_inline() {
        let children = tokenize(session, &token.text, Scope::default());
        session.charge(count_tokens(&children))?;
        token.children = children;
        return Ok(());
    }
    for child in &mut token.children {
        tokenize_tree(session, child)?;
    }
    Ok(())
}

/// Where an inline sequence sits: inside a link label or not, and how many
/// links or images enclose it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    in_link: bool,
    depth: usize,
}

impl Scope {
    fn label(self) -> Self {
        Self {
            in_link: true,
            depth: self.depth + 1,
        }
    }
}

/// Tokenizes one block's text. Inside a link label only images may nest.
/// Links, images and emphasis together nest no deeper than
/// `max_nesting_depth`; runs that would go deeper stay literal.
pub(crate) fn tokenize(session: &Session<'_>, text: &str, scope: Scope) -> Vec<Token> {
    let max_depth = session.options.max_nesting_depth;
    let links_allowed = scope.depth < max_depth;
    let mut cur = Cursor::new(text);
    let mut nodes = Vec::new();

    while !cur.eof() {
        let rest = cur.rest();
        let step = session
            .grammar
            .inline_rules()
            .iter()
            .filter(|rule| !scope.in_link || rule.allowed_in_link(rest))
            .filter(|rule| links_allowed || !matches!(**rule, InlineRule::Link | InlineRule::RefLink))
            .find_map(|&rule| {
                try_rule(session, rule, &cur, scope).map(|(node, len)| (rule, node, len))
            });

        match step {
            Some((rule, node, len)) if len > 0 => {
                log::trace!("inline rule `{}` matched {len} bytes at {}", rule.name(), cur.pos());
                push(&mut nodes, node);
                cur.bump_n(len);
            }
            _ => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                let raw = cur.take(len);
                push(&mut nodes, Node::Token(Token::new(TokenKind::PlainText, raw, raw)));
            }
        }
    }

    emphasis::resolve(nodes, max_depth.saturating_sub(scope.depth))
}

/// Appends a node, merging neighbouring plain text.
fn push(nodes: &mut Vec<Node>, node: Node) {
    if let Node::Token(next) = &node
        && next.kind == TokenKind::PlainText
        && let Some(Node::Token(prev)) = nodes.last_mut()
        && prev.kind == TokenKind::PlainText
    {
        prev.raw.push_str(&next.raw);
        prev.text.push_str(&next.text);
        return;
    }
    nodes.push(node);
}

fn try_rule(
    session: &Session<'_>,
    rule: InlineRule,
    cur: &Cursor<'_>,
    scope: Scope,
) -> Option<(Node, usize)> {
    let g = session.grammar;
    let rest = cur.rest();
    let leaf = |kind: TokenKind, raw: &str, text: &str| {
        Some((Node::Token(Token::new(kind, raw, text)), raw.len()))
    };

    match rule {
        InlineRule::Escape => {
            let raw = g.escape.prefix(rest)?;
            leaf(TokenKind::Escape, raw, &raw[1..])
        }
        InlineRule::Tag => {
            let n = RawHtml::scan(g, rest)?;
            leaf(TokenKind::Tag, &rest[..n], &rest[..n])
        }
        InlineRule::Autolink => {
            let token = Autolink::scan(g, rest)?;
            let len = token.raw.len();
            Some((Node::Token(token), len))
        }
        InlineRule::Link => {
            let m = Link::inline(g, rest)?;
            Some(link_node(session, &rest[..m.len], m, scope))
        }
        InlineRule::RefLink => match Link::reference(rest, &session.links)? {
            Reference::Resolved(m) => Some(link_node(session, &rest[..m.len], m, scope)),
            Reference::Unresolved => {
                let first = rest.chars().next()?;
                let n = first.len_utf8();
                leaf(TokenKind::PlainText, &rest[..n], &rest[..n])
            }
        },
        InlineRule::Strong | InlineRule::Em => {
            let ch = rest.chars().next().filter(|c| matches!(*c, '*' | '_'))?;
            let n = run_len(rest.as_bytes(), ch as u8);
            let wanted = if rule == InlineRule::Strong { n >= 2 } else { n == 1 };
            if !wanted {
                return None;
            }
            let after = rest[n..].chars().next();
            let run = DelimiterRun::new(ch, n, cur.prev_char(), after);
            Some((Node::Delim(run), n))
        }
        InlineRule::CodeSpan => {
            let token = CodeSpan::scan(rest)?;
            let len = token.raw.len();
            Some((Node::Token(token), len))
        }
        InlineRule::Break => {
            let n = g.line_break.match_len(rest)?;
            if rest[n..].trim().is_empty() {
                return None;
            }
            leaf(TokenKind::LineBreak, &rest[..n], "")
        }
        InlineRule::Punctuation => {
            let c = rest.chars().next().filter(|c| c.is_ascii_punctuation() && *c != '`')?;
            let n = c.len_utf8();
            leaf(TokenKind::Punctuation, &rest[..n], &rest[..n])
        }
        InlineRule::Text => {
            let n = text_len(session, rest);
            leaf(TokenKind::PlainText, &rest[..n], &rest[..n])
        }
    }
}

fn link_node(session: &Session<'_>, raw: &str, m: LinkMatch<'_>, scope: Scope) -> (Node, usize) {
    let children = tokenize(session, m.label, scope.label());
    let token = Token::new(m.kind, raw, m.label)
        .with_link(m.href, m.title)
        .with_children(children);
    (Node::Token(token), raw.len())
}

/// Length of a run of plain text. The first unit is a whole backtick run or
/// a single character; the run then stops before anything another rule
/// could start with. Intraword `_` is kept as text.
fn text_len(session: &Session<'_>, s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = match bytes.first() {
        Some(b'`') => run_len(bytes, b'`'),
        _ => s.chars().next().map_or(0, char::len_utf8),
    };

    while i < s.len() {
        match bytes[i] {
            b'\\' | b'<' | b'!' | b'[' | b'`' | b'*' => break,
            b'_' => {
                let run = run_len(&bytes[i..], b'_');
                let before = s[..i].chars().next_back();
                let after = s[i + run..].chars().next();
                let intraword = before.is_some_and(char::is_alphanumeric)
                    && after.is_some_and(char::is_alphanumeric);
                if !intraword {
                    break;
                }
                i += run;
            }
            b' ' if session.grammar.line_break.is_match(&s[i..]) => break,
            _ => i += s[i..].chars().next().map_or(1, char::len_utf8),
        }
    }
    i
}
