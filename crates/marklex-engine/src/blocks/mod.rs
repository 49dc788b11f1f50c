//! # Block tokenizer
//!
//! One recursive function, [`tokenize`], serves the document and every
//! container. At each step the block rules are tried in precedence order
//! against the remaining input; the first match is consumed whole and
//! emitted. Blockquotes and list items strip their markers and call back
//! into [`tokenize`] with a [`Frame`] one level deeper.
//!
//! ## Content modes
//!
//! Tight list items are tokenized in [`ContentMode::Text`]: the paragraph
//! rule is skipped so their lines come out as `text` tokens, which merge
//! with each other. Everywhere else paragraphs are produced.

pub mod kinds;
pub mod lines;

use crate::{
    cursor::Cursor,
    error::LexError,
    grammar::{BlockRule, Grammar},
    lexer::Session,
    links::LinkRef,
    token::{Token, TokenKind},
};

use kinds::{
    BlockQuote, CodeFence, Definition, Heading, IndentedCode, List, ListMatch, Paragraph,
    QuoteMatch, TextLine, ThematicBreak,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    Paragraphs,
    Text,
}

/// Where a call to [`tokenize`] sits in the container tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Container nesting depth; 0 for the document itself.
    pub depth: usize,
    /// Number of enclosing lists.
    pub list_depth: usize,
    pub mode: ContentMode,
}

impl Frame {
    pub fn root() -> Self {
        Self {
            depth: 0,
            list_depth: 0,
            mode: ContentMode::Paragraphs,
        }
    }

    fn quote(self) -> Self {
        Self {
            depth: self.depth + 1,
            mode: ContentMode::Paragraphs,
            ..self
        }
    }

    fn item(self, loose: bool) -> Self {
        Self {
            depth: self.depth + 1,
            list_depth: self.list_depth + 1,
            mode: if loose {
                ContentMode::Paragraphs
            } else {
                ContentMode::Text
            },
        }
    }
}

enum Matched<'s> {
    Leaf(Token),
    Quote(QuoteMatch<'s>),
    List(ListMatch<'s>),
}

impl Matched<'_> {
    fn len(&self) -> usize {
        match self {
            Matched::Leaf(t) => t.raw.len(),
            Matched::Quote(q) => q.raw.len(),
            Matched::List(l) => l.raw.len(),
        }
    }
}

/// Tokenizes `src` into block tokens until it is exhausted.
pub(crate) fn tokenize(
    session: &mut Session<'_>,
    src: &str,
    frame: Frame,
) -> Result<Vec<Token>, LexError> {
    let mut cur = Cursor::new(src);
    let mut out = Vec::new();

    while !cur.eof() {
        let rest = cur.rest();
        let Some((rule, matched)) = first_match(session.grammar, rest, frame) else {
            return Err(LexError::Stalled { offset: cur.pos() });
        };
        let len = matched.len();
        if len == 0 {
            return Err(LexError::Stalled { offset: cur.pos() });
        }
        log::trace!(
            "block rule `{}` matched {len} bytes at {} (depth {})",
            rule.name(),
            cur.pos(),
            frame.depth
        );

        match matched {
            Matched::Leaf(token) => emit_leaf(session, &mut out, rule, token)?,
            Matched::Quote(quote) => {
                let children = nested(session, &quote.inner, frame.quote())?;
                let token = Token::new(TokenKind::Blockquote, quote.raw, quote.inner)
                    .with_children(children);
                session.push(&mut out, token)?;
            }
            Matched::List(list) => {
                let token = list_token(session, list, frame)?;
                session.push(&mut out, token)?;
            }
        }
        cur.bump_n(len);
    }
    Ok(out)
}

fn first_match<'s>(g: &Grammar, rest: &'s str, frame: Frame) -> Option<(BlockRule, Matched<'s>)> {
    g.block_rules()
        .iter()
        .find_map(|&rule| try_rule(g, rule, rest, frame).map(|m| (rule, m)))
}

fn try_rule<'s>(g: &Grammar, rule: BlockRule, s: &'s str, frame: Frame) -> Option<Matched<'s>> {
    match rule {
        BlockRule::Newline => g
            .newline
            .prefix(s)
            .map(|raw| Matched::Leaf(Token::new(TokenKind::Space, raw, ""))),
        BlockRule::IndentedCode => IndentedCode::scan(g, s).map(Matched::Leaf),
        BlockRule::Fences => CodeFence::scan(g, s).map(Matched::Leaf),
        BlockRule::Heading => Heading::atx(g, s).map(Matched::Leaf),
        BlockRule::ThematicBreak => ThematicBreak::scan(g, s).map(Matched::Leaf),
        BlockRule::Blockquote => BlockQuote::scan(g, s).map(Matched::Quote),
        BlockRule::List => List::scan(g, s).map(Matched::List),
        BlockRule::Def => Definition::scan(g, s).map(Matched::Leaf),
        BlockRule::SetextHeading => Heading::setext(g, s).map(Matched::Leaf),
        BlockRule::Paragraph => match frame.mode {
            ContentMode::Paragraphs => Paragraph::scan(g, s).map(Matched::Leaf),
            ContentMode::Text => None,
        },
        BlockRule::Text => TextLine::scan(s).map(Matched::Leaf),
    }
}

/// Appends a leaf token, merging continuation lines into the previous token
/// and registering definitions.
fn emit_leaf(
    session: &mut Session<'_>,
    out: &mut Vec<Token>,
    rule: BlockRule,
    token: Token,
) -> Result<(), LexError> {
    if let Some(prev) = out.last_mut() {
        let lazy_code = rule == BlockRule::IndentedCode
            && matches!(prev.kind, TokenKind::Paragraph | TokenKind::Text);
        let more_text = rule == BlockRule::Text && prev.kind == TokenKind::Text;
        if lazy_code || more_text {
            let continuation = token
                .raw
                .trim_end_matches('\n')
                .split('\n')
                .map(|l| l.trim_start_matches(' '))
                .collect::<Vec<_>>()
                .join("\n");
            prev.raw.push_str(&token.raw);
            prev.text.push('\n');
            prev.text.push_str(&continuation);
            return Ok(());
        }
    }

    if token.kind == TokenKind::Def {
        let link = LinkRef {
            href: token.href.clone().unwrap_or_default(),
            title: token.title.clone(),
        };
        if !session.links.define(&token.text, link) {
            log::trace!("duplicate link definition `{}` ignored", token.text);
        }
    }
    session.push(out, token)
}

fn list_token(
    session: &mut Session<'_>,
    list: ListMatch<'_>,
    frame: Frame,
) -> Result<Token, LexError> {
    let depth = frame.list_depth + 1;
    let item_frame = frame.item(list.attrs.loose);
    let mut items = Vec::with_capacity(list.items.len());
    for item in list.items {
        let children = nested(session, &item.text, item_frame)?;
        let token = Token::new(TokenKind::ListItem, item.raw, item.text)
            .with_depth(depth)
            .with_children(children);
        session.push(&mut items, token)?;
    }
    let mut token = Token::new(TokenKind::List, list.raw, "")
        .with_depth(depth)
        .with_children(items);
    token.list = Some(list.attrs);
    Ok(token)
}

/// Tokenizes a container's inner text, or flattens it into one leaf when
/// the frame is deeper than the configured limit.
fn nested(session: &mut Session<'_>, inner: &str, frame: Frame) -> Result<Vec<Token>, LexError> {
    let limit = session.options.max_nesting_depth;
    if frame.depth <= limit {
        return tokenize(session, inner, frame);
    }

    log::warn!(
        "container nesting depth {} exceeds the limit of {limit}, flattening its content",
        frame.depth
    );
    let mut out = Vec::new();
    if !inner.is_empty() {
        let kind = match frame.mode {
            ContentMode::Paragraphs => TokenKind::Paragraph,
            ContentMode::Text => TokenKind::Text,
        };
        session.push(&mut out, Token::new(kind, inner, inner.trim_end_matches('\n')))?;
    }
    Ok(out)
}
