//! Input normalization applied before block tokenization.
//!
//! The block rules assume `\n` line endings, no tabs, and that a blank line
//! is exactly `\n`. [`preprocess`] establishes all three and is idempotent.

/// Spaces substituted for each tab character.
pub const TAB_WIDTH: usize = 4;

/// Normalizes line endings, expands tabs and empties whitespace-only lines.
pub fn preprocess(src: &str) -> String {
    let unified = src.replace("\r\n", "\n").replace('\r', "\n");
    let expanded = unified.replace('\t', &" ".repeat(TAB_WIDTH));

    let mut out = String::with_capacity(expanded.len());
    for (i, line) in expanded.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.trim().is_empty() {
            out.push_str(line);
        }
    }
    out
}
