//! # marklex-engine
//!
//! A two-phase Markdown lexer producing a lossless token tree.
//!
//! ```text
//! source ──preprocess──▶ block pass ──▶ inline pass ──▶ Document
//!                          │   ▲            ▲
//!                          ▼   │            │
//!                    containers (recurse)   link references
//! ```
//!
//! - [`preprocess`] normalizes line endings, tabs and blank lines.
//! - The block pass ([`blocks`]) tries block rules in a fixed order,
//!   recursing into blockquotes and list items, and collects link
//!   reference definitions.
//! - The inline pass ([`inline`]) tokenizes the text of headings,
//!   paragraphs and text blocks, resolving emphasis with a delimiter stack.
//!
//! Every token keeps the exact source it consumed in `raw`; the
//! [`snapshot::invariants`] checks spell out how the tree reproduces its
//! input.
//!
//! ```
//! let doc = marklex_engine::lex("## Title\n").unwrap();
//! assert_eq!(doc.tokens[0].depth, 2);
//! assert_eq!(doc.tokens[0].text, "Title");
//! ```

pub mod blocks;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod inline;
pub mod lexer;
pub mod links;
pub mod options;
pub mod preprocess;
pub mod snapshot;
pub mod token;

pub use error::{Error, GrammarError, LexError};
pub use grammar::Grammar;
pub use lexer::Lexer;
pub use links::{LinkRef, LinkRefs};
pub use options::LexOptions;
pub use preprocess::preprocess;
pub use token::{Document, ListAttrs, Token, TokenKind};

/// Preprocesses and lexes `src` with a freshly compiled grammar and default
/// options. Callers lexing many documents should compile one [`Grammar`] and
/// reuse a [`Lexer`].
pub fn lex(src: &str) -> Result<Document, Error> {
    let grammar = Grammar::compile()?;
    Ok(Lexer::new(&grammar).lex(&preprocess(src))?)
}
