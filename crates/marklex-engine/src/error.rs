use thiserror::Error;

/// Raised once by [`Grammar::compile`](crate::grammar::Grammar::compile)
/// when a fragment cannot be turned into an anchored matcher.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar fragment `{name}` failed to compile: {source}")]
    InvalidFragment {
        name: &'static str,
        source: regex::Error,
    },

    #[error("grammar fragment `{name}` is not anchored at the cursor (pattern must start with `^`)")]
    Unanchored { name: &'static str },
}

/// Per-document tokenization failure.
///
/// Malformed Markdown never produces one of these; they only report resource
/// limits and engine faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("input is {len} bytes, over the configured limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },

    #[error("document produced more than {limit} tokens")]
    TooManyTokens { limit: usize },

    #[error("no rule advanced the cursor at byte {offset}")]
    Stalled { offset: usize },
}

/// Either failure of the one-shot [`lex`](crate::lex) helper.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Lex(#[from] LexError),
}
