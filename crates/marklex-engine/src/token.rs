use serde::{Deserialize, Serialize};

use crate::links::LinkRefs;

/// The closed set of token kinds.
///
/// Fenced code blocks are reported as [`TokenKind::Code`] and setext headings
/// as [`TokenKind::Heading`]; the renderer does not need to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // Block kinds
    Space,
    Code,
    Heading,
    Hr,
    Blockquote,
    List,
    ListItem,
    Def,
    Paragraph,
    Text,
    // Inline kinds
    Escape,
    Tag,
    Autolink,
    Link,
    Image,
    Strong,
    Em,
    CodeSpan,
    LineBreak,
    Punctuation,
    PlainText,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Space => "space",
            TokenKind::Code => "code",
            TokenKind::Heading => "heading",
            TokenKind::Hr => "hr",
            TokenKind::Blockquote => "blockquote",
            TokenKind::List => "list",
            TokenKind::ListItem => "list_item",
            TokenKind::Def => "def",
            TokenKind::Paragraph => "paragraph",
            TokenKind::Text => "text",
            TokenKind::Escape => "escape",
            TokenKind::Tag => "tag",
            TokenKind::Autolink => "autolink",
            TokenKind::Link => "link",
            TokenKind::Image => "image",
            TokenKind::Strong => "strong",
            TokenKind::Em => "em",
            TokenKind::CodeSpan => "code_span",
            TokenKind::LineBreak => "line_break",
            TokenKind::Punctuation => "punctuation",
            TokenKind::PlainText => "plain_text",
        }
    }

    /// Block tokens whose `text` is handed to the inline tokenizer.
    pub fn carries_inline(self) -> bool {
        matches!(
            self,
            TokenKind::Heading | TokenKind::Paragraph | TokenKind::Text
        )
    }

    /// Block tokens whose children are block tokens.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            TokenKind::Blockquote | TokenKind::List | TokenKind::ListItem
        )
    }
}

/// Attributes of a `list` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAttrs {
    pub ordered: bool,
    /// Number of the first item for ordered lists.
    pub start: Option<u64>,
    /// Whether any item is separated from its neighbour by a blank line.
    pub loose: bool,
}

/// One node of the token tree.
///
/// `raw` is always the exact source consumed for this token, so the tree is
/// lossless: see [`crate::snapshot::invariants`] for the precise rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Info-string language of a fenced code block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListAttrs>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Token {
    /// A token with only `kind`, `raw` and `text` set.
    pub fn new(kind: TokenKind, raw: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            text: text.into(),
            depth: 0,
            href: None,
            title: None,
            lang: None,
            list: None,
            children: vec![],
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_link(mut self, href: impl Into<String>, title: Option<String>) -> Self {
        self.href = Some(href.into());
        self.title = title;
        self
    }

    pub fn with_children(mut self, children: Vec<Token>) -> Self {
        self.children = children;
        self
    }

    /// Number of tokens in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + count_tokens(&self.children)
    }
}

/// Number of tokens in a forest.
pub fn count_tokens(tokens: &[Token]) -> usize {
    tokens.iter().map(Token::count).sum()
}

/// Concatenates the `raw` of a token sequence in emission order.
pub fn concat_raw(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.raw.as_str()).collect()
}

/// The result of lexing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub tokens: Vec<Token>,
    /// Reference definitions gathered during the block pass.
    pub links: LinkRefs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_includes_nested_children() {
        let tree = Token::new(TokenKind::Paragraph, "a *b*", "a *b*").with_children(vec![
            Token::new(TokenKind::PlainText, "a ", "a "),
            Token::new(TokenKind::Em, "*b*", "b")
                .with_children(vec![Token::new(TokenKind::PlainText, "b", "b")]),
        ]);
        assert_eq!(tree.count(), 4);
    }

    #[test]
    fn concat_raw_preserves_order() {
        let tokens = vec![
            Token::new(TokenKind::Paragraph, "a\n", "a"),
            Token::new(TokenKind::Space, "\n", ""),
            Token::new(TokenKind::Hr, "---\n", ""),
        ];
        assert_eq!(concat_raw(&tokens), "a\n\n---\n");
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(TokenKind::ListItem.as_str(), "list_item");
        assert_eq!(TokenKind::CodeSpan.as_str(), "code_span");
        assert_eq!(TokenKind::PlainText.as_str(), "plain_text");
    }

    #[test]
    fn inline_bearing_kinds() {
        assert!(TokenKind::Paragraph.carries_inline());
        assert!(TokenKind::Heading.carries_inline());
        assert!(!TokenKind::Code.carries_inline());
        assert!(TokenKind::ListItem.is_container());
        assert!(!TokenKind::Text.is_container());
    }
}
