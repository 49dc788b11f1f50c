use regex::{Captures, Regex};

use crate::error::GrammarError;

/// A named, compiled sub-grammar that only ever matches at the start of its
/// input.
///
/// Composite rules never splice fragment sources together; they call the
/// compiled fragments one after another on successive slices of the input.
#[derive(Debug, Clone)]
pub struct Fragment {
    name: &'static str,
    re: Regex,
}

impl Fragment {
    /// Compiles `pattern`, which must begin with `^`.
    pub fn compile(name: &'static str, pattern: &str) -> Result<Self, GrammarError> {
        if !pattern.starts_with('^') {
            return Err(GrammarError::Unanchored { name });
        }
        let re = Regex::new(pattern)
            .map_err(|source| GrammarError::InvalidFragment { name, source })?;
        Ok(Self { name, re })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Length in bytes of the match at the start of `s`, if any.
    pub fn match_len(&self, s: &str) -> Option<usize> {
        self.re.find(s).map(|m| m.end())
    }

    /// The matched prefix of `s`, if any.
    pub fn prefix<'h>(&self, s: &'h str) -> Option<&'h str> {
        self.re.find(s).map(|m| m.as_str())
    }

    pub fn captures<'h>(&self, s: &'h str) -> Option<Captures<'h>> {
        self.re.captures(s)
    }

    pub fn is_match(&self, s: &str) -> bool {
        self.re.is_match(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unanchored_pattern() {
        let err = Fragment::compile("loose", "a+").unwrap_err();
        assert!(matches!(err, GrammarError::Unanchored { name: "loose" }));
    }

    #[test]
    fn rejects_malformed_pattern() {
        let err = Fragment::compile("broken", "^(a").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidFragment { name: "broken", .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn matches_only_at_start() {
        let f = Fragment::compile("digits", r"^\d+").unwrap();
        assert_eq!(f.match_len("123abc"), Some(3));
        assert_eq!(f.match_len("abc123"), None);
        assert_eq!(f.prefix("42)"), Some("42"));
    }
}
