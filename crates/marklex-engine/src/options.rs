use serde::{Deserialize, Serialize};

/// Resource limits applied to a single lexing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexOptions {
    /// Container nesting (blockquotes and list items) beyond this depth is
    /// flattened into a single text block.
    pub max_nesting_depth: usize,
    /// Upper bound on block and inline tokens produced for one document.
    pub max_tokens: usize,
    /// Upper bound on the size of the (preprocessed) input.
    pub max_input_bytes: usize,
}

impl LexOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;
    pub const DEFAULT_MAX_TOKENS: usize = 1_000_000;
    pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            max_input_bytes: Self::DEFAULT_MAX_INPUT_BYTES,
        }
    }
}
