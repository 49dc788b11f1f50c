//! Delimiter runs and their resolution into `strong` and `em`.

use crate::token::{Token, TokenKind, concat_raw};

/// A run of `*` or `_` waiting to be paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRun {
    pub ch: char,
    /// Characters still available for pairing.
    pub count: usize,
    /// Length of the run as written.
    pub orig: usize,
    pub can_open: bool,
    pub can_close: bool,
}

impl DelimiterRun {
    /// Classifies a run of `count` delimiter characters by its neighbours.
    /// `None` stands for the start or end of the text and counts as
    /// whitespace.
    pub fn new(ch: char, count: usize, before: Option<char>, after: Option<char>) -> Self {
        let before = before.unwrap_or(' ');
        let after = after.unwrap_or(' ');
        let left = is_left_flanking(before, after);
        let right = is_right_flanking(before, after);
        let (can_open, can_close) = if ch == '_' {
            (
                left && (!right || is_punctuation(before)),
                right && (!left || is_punctuation(after)),
            )
        } else {
            (left, right)
        };
        Self {
            ch,
            count,
            orig: count,
            can_open,
            can_close,
        }
    }

    /// Runs whose lengths would make `a**b*` style pairings ambiguous are
    /// not paired: when either side can both open and close, the sum of the
    /// original lengths must not be a multiple of three unless both are.
    fn pairs_with(&self, closer: &DelimiterRun) -> bool {
        if self.ch != closer.ch || !self.can_open || self.count == 0 {
            return false;
        }
        if self.can_close || closer.can_open {
            let sum = self.orig + closer.orig;
            if sum % 3 == 0 && !(self.orig % 3 == 0 && closer.orig % 3 == 0) {
                return false;
            }
        }
        true
    }

    fn into_token(self) -> Option<Token> {
        (self.count > 0).then(|| {
            let raw = self.ch.to_string().repeat(self.count);
            Token::new(TokenKind::Punctuation, raw.clone(), raw)
        })
    }
}

pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c as u32,
            0x00A1..=0x00BF | 0x00D7 | 0x00F7 | 0x2010..=0x2027 | 0x2030..=0x205E | 0x2E00..=0x2E7F | 0x3001..=0x3003 | 0x3008..=0x3011)
}

fn is_left_flanking(before: char, after: char) -> bool {
    !after.is_whitespace()
        && (!is_punctuation(after) || before.is_whitespace() || is_punctuation(before))
}

fn is_right_flanking(before: char, after: char) -> bool {
    !before.is_whitespace()
        && (!is_punctuation(before) || after.is_whitespace() || is_punctuation(after))
}

/// An item of the scanned inline sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Token(Token),
    Delim(DelimiterRun),
}

impl Node {
    fn into_token(self) -> Option<Token> {
        match self {
            Node::Token(t) => Some(t),
            Node::Delim(d) => d.into_token(),
        }
    }

    fn nesting(&self) -> usize {
        match self {
            Node::Token(t) => nesting(t),
            Node::Delim(_) => 0,
        }
    }
}

/// How many `strong`, `em`, `link` and `image` tokens are stacked in the
/// deepest path through `t`.
pub fn nesting(t: &Token) -> usize {
    let own = usize::from(matches!(
        t.kind,
        TokenKind::Strong | TokenKind::Em | TokenKind::Link | TokenKind::Image
    ));
    own + t.children.iter().map(nesting).max().unwrap_or(0)
}

/// Pairs delimiter runs, innermost closer first, and wraps what lies
/// between each pair in a `strong` (two characters from each side) or `em`
/// token. Unpaired characters become `punctuation`.
///
/// A pair whose token would nest deeper than `max_depth` is left unpaired.
pub fn resolve(mut nodes: Vec<Node>, max_depth: usize) -> Vec<Token> {
    // Openers before `floor` would enclose a pair already found too deep.
    let mut floor = 0;
    let mut i = 0;
    while i < nodes.len() {
        let Node::Delim(closer) = nodes[i] else {
            i += 1;
            continue;
        };
        if !closer.can_close || closer.count == 0 {
            i += 1;
            continue;
        }

        let opener_at = (floor..i).rev().find(|&j| match &nodes[j] {
            Node::Delim(opener) => opener.pairs_with(&closer),
            Node::Token(_) => false,
        });
        let Some(j) = opener_at else {
            i += 1;
            continue;
        };
        let Node::Delim(mut opener) = nodes[j] else {
            i += 1;
            continue;
        };

        let depth = 1 + nodes[j + 1..i].iter().map(Node::nesting).max().unwrap_or(0);
        if depth > max_depth {
            floor = j + 1;
            i += 1;
            continue;
        }

        let used = if opener.count >= 2 && closer.count >= 2 { 2 } else { 1 };
        let inner: Vec<Token> = nodes.drain(j + 1..i).filter_map(Node::into_token).collect();
        let marker = closer.ch.to_string().repeat(used);
        let text = concat_raw(&inner);
        let kind = if used == 2 { TokenKind::Strong } else { TokenKind::Em };
        let token = Token::new(kind, format!("{marker}{text}{marker}"), text).with_children(inner);

        opener.count -= used;
        let mut closer = closer;
        closer.count -= used;
        nodes[j] = Node::Delim(opener);
        nodes[j + 1] = Node::Delim(closer);
        nodes.insert(j + 1, Node::Token(token));
        // Re-examine the same closer: it may have characters left.
        i = j + 2;
    }

    nodes.into_iter().filter_map(Node::into_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const UNBOUNDED: usize = usize::MAX;

    fn text(s: &str) -> Node {
        Node::Token(Token::new(TokenKind::PlainText, s, s))
    }

    fn delim(ch: char, count: usize, before: Option<char>, after: Option<char>) -> Node {
        Node::Delim(DelimiterRun::new(ch, count, before, after))
    }

    fn shape(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|t| match t.kind {
                TokenKind::PlainText | TokenKind::Punctuation => t.raw.clone(),
                kind => format!("{}({})", kind.as_str(), shape(&t.children)),
            })
            .collect()
    }

    #[rstest]
    #[case::intraword_star('*', Some('a'), Some('b'), true, true)]
    #[case::intraword_underscore('_', Some('a'), Some('b'), false, false)]
    #[case::spaced('*', Some(' '), Some(' '), false, false)]
    #[case::start_of_text('*', None, Some('x'), true, false)]
    #[case::after_punct_underscore('_', Some('('), Some('x'), true, false)]
    #[case::before_punct_underscore('_', Some('x'), Some('.'), false, true)]
    fn flanking(
        #[case] ch: char,
        #[case] before: Option<char>,
        #[case] after: Option<char>,
        #[case] can_open: bool,
        #[case] can_close: bool,
    ) {
        let run = DelimiterRun::new(ch, 1, before, after);
        assert_eq!((run.can_open, run.can_close), (can_open, can_close));
    }

    #[test]
    fn em_inside_word() {
        let nodes = vec![
            text("a"),
            delim('*', 1, Some('a'), Some('b')),
            text("b"),
            delim('*', 1, Some('b'), Some('c')),
            text("c"),
        ];
        let tokens = resolve(nodes, UNBOUNDED);
        assert_eq!(shape(&tokens), "aem(b)c");
        assert_eq!(tokens[1].raw, "*b*");
        assert_eq!(tokens[1].text, "b");
    }

    #[test]
    fn spaced_stars_stay_punctuation() {
        let nodes = vec![
            text("a "),
            delim('*', 1, Some(' '), Some(' ')),
            text(" b "),
            delim('*', 1, Some(' '), None),
        ];
        assert_eq!(shape(&resolve(nodes, UNBOUNDED)), "a * b *");
    }

    #[test]
    fn triple_run_nests_em_in_strong() {
        let nodes = vec![
            delim('*', 3, None, Some('x')),
            text("x"),
            delim('*', 3, Some('x'), None),
        ];
        let tokens = resolve(nodes, UNBOUNDED);
        assert_eq!(shape(&tokens), "em(strong(x))");
        assert_eq!(tokens[0].raw, "***x***");
        assert_eq!(tokens[0].text, "**x**");
    }

    #[test]
    fn leftover_opener_characters_precede_the_match() {
        let nodes = vec![
            delim('*', 3, None, Some('x')),
            text("x"),
            delim('*', 2, Some('x'), None),
        ];
        assert_eq!(shape(&resolve(nodes, UNBOUNDED)), "*strong(x)");
    }

    #[test]
    fn rule_of_three_blocks_mixed_pairing() {
        // *a**b
        let nodes = vec![
            delim('*', 1, None, Some('a')),
            text("a"),
            delim('*', 2, Some('a'), Some('b')),
            text("b"),
        ];
        assert_eq!(shape(&resolve(nodes, UNBOUNDED)), "*a**b");
    }

    #[test]
    fn different_characters_do_not_pair() {
        let nodes = vec![
            delim('*', 1, None, Some('a')),
            text("a"),
            delim('_', 1, Some('a'), None),
        ];
        assert_eq!(shape(&resolve(nodes, UNBOUNDED)), "*a_");
    }

    #[test]
    fn pairs_beyond_max_depth_stay_punctuation() {
        // **a *b* c**
        let nodes = vec![
            delim('*', 2, None, Some('a')),
            text("a "),
            delim('*', 1, Some(' '), Some('b')),
            text("b"),
            delim('*', 1, Some('b'), Some(' ')),
            text(" c"),
            delim('*', 2, Some('c'), None),
        ];
        assert_eq!(shape(&resolve(nodes.clone(), 2)), "strong(a em(b) c)");
        assert_eq!(shape(&resolve(nodes.clone(), 1)), "**a em(b) c**");
        assert_eq!(shape(&resolve(nodes, 0)), "**a *b* c**");
    }

    #[test]
    fn nesting_counts_the_deepest_path() {
        let tree = Token::new(TokenKind::Strong, "**a *b***", "a *b*").with_children(vec![
            Token::new(TokenKind::PlainText, "a ", "a "),
            Token::new(TokenKind::Em, "*b*", "b")
                .with_children(vec![Token::new(TokenKind::PlainText, "b", "b")]),
        ]);
        assert_eq!(nesting(&tree), 2);
        assert_eq!(nesting(&Token::new(TokenKind::PlainText, "x", "x")), 0);
    }
}
