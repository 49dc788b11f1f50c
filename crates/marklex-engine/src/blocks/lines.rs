//! Line helpers over preprocessed text (`\n` endings, no tabs).

/// The first line of `s` without its terminator, and its length including
/// the terminator.
pub fn first_line(s: &str) -> (&str, usize) {
    match s.find('\n') {
        Some(i) => (&s[..i], i + 1),
        None => (s, s.len()),
    }
}

/// Number of leading spaces.
pub fn indent(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Removes at most `max` leading spaces.
pub fn strip_spaces(line: &str, max: usize) -> &str {
    &line[indent(line).min(max)..]
}

/// Skips spaces, at most one newline, then spaces again.
pub fn skip_to_next_token(s: &str) -> &str {
    let s = s.trim_start_matches(' ');
    let s = s.strip_prefix('\n').unwrap_or(s);
    s.trim_start_matches(' ')
}
