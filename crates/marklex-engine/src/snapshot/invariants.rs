use crate::token::{Document, Token, TokenKind, concat_raw};

/// Asserts the lossless-tree rules:
///
/// - the top-level `raw` values concatenate to `src`;
/// - a blockquote's or list item's children concatenate to its `text`;
/// - a list's items concatenate to its `raw`;
/// - the inline children of text-bearing blocks, emphasis and links
///   concatenate to the parent's `text`;
/// - no token has an empty `raw`.
pub fn check(src: &str, doc: &Document) {
    assert_eq!(
        concat_raw(&doc.tokens),
        src,
        "top-level tokens do not reproduce the input"
    );
    for token in &doc.tokens {
        check_token(token);
    }
}

fn check_token(t: &Token) {
    assert!(!t.raw.is_empty(), "empty raw on {:?} token", t.kind);

    let covered = match t.kind {
        TokenKind::Blockquote | TokenKind::ListItem => Some(&t.text),
        TokenKind::List => Some(&t.raw),
        kind if kind.carries_inline() => Some(&t.text),
        TokenKind::Strong | TokenKind::Em | TokenKind::Link | TokenKind::Image => Some(&t.text),
        _ => None,
    };
    if let Some(expected) = covered {
        assert_eq!(
            &concat_raw(&t.children),
            expected,
            "children of {:?} token {:?} do not cover it",
            t.kind,
            t.raw
        );
    }

    for child in &t.children {
        check_token(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkRefs;

    #[test]
    #[should_panic(expected = "do not reproduce the input")]
    fn detects_missing_bytes() {
        let doc = Document {
            tokens: vec![Token::new(TokenKind::Hr, "---\n", "")],
            links: LinkRefs::new(),
        };
        check("---\n\n", &doc);
    }

    #[test]
    #[should_panic(expected = "do not cover it")]
    fn detects_inline_gap() {
        let doc = Document {
            tokens: vec![
                Token::new(TokenKind::Paragraph, "ab", "ab")
                    .with_children(vec![Token::new(TokenKind::PlainText, "a", "a")]),
            ],
            links: LinkRefs::new(),
        };
        check("ab", &doc);
    }
}
