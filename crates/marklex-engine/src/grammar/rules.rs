//! Rule names and their precedence.
//!
//! The order of [`BLOCK_PRECEDENCE`] and [`INLINE_PRECEDENCE`] is
//! load-bearing: the first rule that matches at the cursor wins, there is no
//! longest-match step.

/// Block-level rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockRule {
    Newline,
    IndentedCode,
    Fences,
    Heading,
    ThematicBreak,
    Blockquote,
    List,
    Def,
    SetextHeading,
    Paragraph,
    Text,
}

pub const BLOCK_PRECEDENCE: [BlockRule; 11] = [
    BlockRule::Newline,
    BlockRule::IndentedCode,
    BlockRule::Fences,
    BlockRule::Heading,
    BlockRule::ThematicBreak,
    BlockRule::Blockquote,
    BlockRule::List,
    BlockRule::Def,
    BlockRule::SetextHeading,
    BlockRule::Paragraph,
    BlockRule::Text,
];

impl BlockRule {
    pub fn name(self) -> &'static str {
        match self {
            BlockRule::Newline => "newline",
            BlockRule::IndentedCode => "code",
            BlockRule::Fences => "fences",
            BlockRule::Heading => "heading",
            BlockRule::ThematicBreak => "hr",
            BlockRule::Blockquote => "blockquote",
            BlockRule::List => "list",
            BlockRule::Def => "def",
            BlockRule::SetextHeading => "lheading",
            BlockRule::Paragraph => "paragraph",
            BlockRule::Text => "text",
        }
    }
}

/// Inline-level rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineRule {
    Escape,
    Tag,
    Autolink,
    Link,
    RefLink,
    Strong,
    Em,
    CodeSpan,
    Break,
    Punctuation,
    Text,
}

pub const INLINE_PRECEDENCE: [InlineRule; 11] = [
    InlineRule::Escape,
    InlineRule::Tag,
    InlineRule::Autolink,
    InlineRule::Link,
    InlineRule::RefLink,
    InlineRule::Strong,
    InlineRule::Em,
    InlineRule::CodeSpan,
    InlineRule::Break,
    InlineRule::Punctuation,
    InlineRule::Text,
];

impl InlineRule {
    pub fn name(self) -> &'static str {
        match self {
            InlineRule::Escape => "escape",
            InlineRule::Tag => "tag",
            InlineRule::Autolink => "autolink",
            InlineRule::Link => "link",
            InlineRule::RefLink => "reflink",
            InlineRule::Strong => "strong",
            InlineRule::Em => "em",
            InlineRule::CodeSpan => "codespan",
            InlineRule::Break => "br",
            InlineRule::Punctuation => "punctuation",
            InlineRule::Text => "text",
        }
    }

    /// Whether the rule may fire at `rest` inside a link label. Links and
    /// autolinks cannot nest in a link; images can.
    pub fn allowed_in_link(self, rest: &str) -> bool {
        match self {
            InlineRule::Autolink => false,
            InlineRule::Link | InlineRule::RefLink => rest.starts_with('!'),
            _ => true,
        }
    }
}
