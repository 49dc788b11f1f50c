//! # Lexer
//!
//! Entry point tying the two passes together:
//!
//! 1. the block pass walks the whole document, recursing into containers and
//!    filling the link-reference table;
//! 2. only then does the inline pass run over every text-bearing block, so a
//!    reference may be used before it is defined.

use crate::{
    blocks::{self, Frame},
    error::LexError,
    grammar::Grammar,
    inline,
    links::LinkRefs,
    options::LexOptions,
    token::{Document, Token},
};

/// Tokenizes documents against a shared, compiled [`Grammar`].
///
/// A `Lexer` holds no per-document state, so one instance (or one grammar
/// shared between several lexers) can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Lexer<'g> {
    grammar: &'g Grammar,
    options: LexOptions,
}

impl<'g> Lexer<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            options: LexOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LexOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Tokenizes one preprocessed document.
    pub fn lex(&self, src: &str) -> Result<Document, LexError> {
        if src.len() > self.options.max_input_bytes {
            return Err(LexError::InputTooLarge {
                len: src.len(),
                limit: self.options.max_input_bytes,
            });
        }

        let mut session = Session::new(self.grammar, &self.options);
        let mut tokens = blocks::tokenize(&mut session, src, Frame::root())?;
        let block_count = session.emitted;
        for token in &mut tokens {
            inline::tokenize_tree(&mut session, token)?;
        }

        log::debug!(
            "lexed {} bytes: {} block tokens, {} total, {} link definitions",
            src.len(),
            block_count,
            session.emitted,
            session.links.len()
        );
        Ok(Document {
            tokens,
            links: session.links,
        })
    }
}

/// Mutable state of one lexing call.
pub(crate) struct Session<'a> {
    pub(crate) grammar: &'a Grammar,
    pub(crate) options: &'a LexOptions,
    pub(crate) links: LinkRefs,
    emitted: usize,
}

impl<'a> Session<'a> {
    pub(crate) fn new(grammar: &'a Grammar, options: &'a LexOptions) -> Self {
        Self {
            grammar,
            options,
            links: LinkRefs::new(),
            emitted: 0,
        }
    }

    /// Accounts for `n` new tokens against the configured limit.
    pub(crate) fn charge(&mut self, n: usize) -> Result<(), LexError> {
        self.emitted += n;
        if self.emitted > self.options.max_tokens {
            return Err(LexError::TooManyTokens {
                limit: self.options.max_tokens,
            });
        }
        Ok(())
    }

    /// Charges one token and appends it.
    pub(crate) fn push(&mut self, out: &mut Vec<Token>, token: Token) -> Result<(), LexError> {
        self.charge(1)?;
        out.push(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn rejects_oversized_input() {
        let grammar = Grammar::compile().unwrap();
        let lexer = Lexer::new(&grammar).with_options(LexOptions {
            max_input_bytes: 4,
            ..LexOptions::default()
        });
        assert_eq!(
            lexer.lex("hello").unwrap_err(),
            LexError::InputTooLarge { len: 5, limit: 4 }
        );
    }

    #[test]
    fn enforces_token_limit() {
        let grammar = Grammar::compile().unwrap();
        let lexer = Lexer::new(&grammar).with_options(LexOptions {
            max_tokens: 3,
            ..LexOptions::default()
        });
        let err = lexer.lex("# a\n\n# b\n\n# c\n").unwrap_err();
        assert_eq!(err, LexError::TooManyTokens { limit: 3 });
    }

    #[test]
    fn empty_input_yields_empty_document() {
        let grammar = Grammar::compile().unwrap();
        let doc = Lexer::new(&grammar).lex("").unwrap();
        assert!(doc.tokens.is_empty());
        assert!(doc.links.is_empty());
    }

    #[test]
    fn references_resolve_before_their_definition() {
        let grammar = Grammar::compile().unwrap();
        let doc = Lexer::new(&grammar).lex("[x]\n\n[x]: /url \"t\"\n").unwrap();
        let para = &doc.tokens[0];
        assert_eq!(para.kind, TokenKind::Paragraph);
        let link = &para.children[0];
        assert_eq!(link.kind, TokenKind::Link);
        assert_eq!(link.href.as_deref(), Some("/url"));
        assert_eq!(link.title.as_deref(), Some("t"));
    }

    #[test]
    fn grammar_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grammar>();
        assert_send_sync::<Lexer<'static>>();
    }
}
