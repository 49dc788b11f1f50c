use crate::{
    blocks::{
        kinds::{def::Definition, paragraph::Paragraph},
        lines::{first_line, indent, strip_spaces},
    },
    grammar::Grammar,
    token::ListAttrs,
};

/// Content indentation beyond which a list item's first line keeps all but
/// one space, so the remainder reads as indented code.
const MAX_CONTENT_PAD: usize = 4;

/// The bullet that opens a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub indent: usize,
    /// Length of the bullet itself (`-` or `12.`).
    pub len: usize,
    /// Last character of the bullet: `-`, `*`, `+`, `.` or `)`.
    pub delimiter: char,
    pub number: Option<u64>,
}

impl Marker {
    /// Recognizes a bullet followed by a space or the end of the line.
    pub fn parse(g: &Grammar, line: &str) -> Option<Self> {
        let n = indent(line);
        if n > 3 {
            return None;
        }
        let after = &line[n..];
        let bullet = g.bullet.prefix(after)?;
        let tail = &after[bullet.len()..];
        if !(tail.is_empty() || tail.starts_with(' ')) {
            return None;
        }
        Some(Self {
            indent: n,
            len: bullet.len(),
            delimiter: bullet.chars().next_back()?,
            number: bullet[..bullet.len() - 1].parse().ok(),
        })
    }

    /// Smallest indentation that keeps a line inside this item.
    fn min_content_indent(&self) -> usize {
        self.indent + self.len + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMatch<'s> {
    pub raw: &'s str,
    /// The item body with bullet and continuation indentation removed.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMatch<'s> {
    pub raw: &'s str,
    pub attrs: ListAttrs,
    pub items: Vec<ItemMatch<'s>>,
}

pub struct List;

impl List {
    pub fn scan<'s>(g: &Grammar, s: &'s str) -> Option<ListMatch<'s>> {
        let (line, _) = first_line(s);
        let first = Marker::parse(g, line)?;
        let extent = Self::extent(g, s, &first);

        // Items start at a bullet on the list's own indentation. A bullet
        // with a different delimiter ends this list and starts another.
        let mut starts = Vec::new();
        let mut end = extent;
        let mut offset = 0;
        for line in s[..extent].split_inclusive('\n') {
            let body = line.strip_suffix('\n').unwrap_or(line);
            if let Some(m) = Marker::parse(g, body)
                && m.indent == first.indent
            {
                if m.delimiter != first.delimiter {
                    end = offset;
                    break;
                }
                starts.push(offset);
            }
            offset += line.len();
        }

        let raw = &s[..end];
        let items: Vec<ItemMatch<'s>> = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let stop = starts.get(i + 1).copied().unwrap_or(end);
                let item = &raw[start..stop];
                ItemMatch {
                    raw: item,
                    text: Self::item_text(g, item),
                }
            })
            .collect();

        let last = items.len().saturating_sub(1);
        let loose = items.iter().enumerate().any(|(i, item)| {
            (i < last && item.raw.ends_with("\n\n"))
                || item.text.trim_end_matches('\n').contains("\n\n")
        });

        Some(ListMatch {
            raw,
            attrs: ListAttrs {
                ordered: first.number.is_some(),
                start: first.number,
                loose,
            },
            items,
        })
    }

    /// Byte length of the list. Blank lines between items are part of the
    /// list; trailing blank lines are not.
    ///
    /// The list ends before a thematic break or a link reference definition
    /// at its own indentation, after two consecutive blank lines, and after
    /// one blank line unless the next line is indented into an item or is a
    /// sibling bullet with the same delimiter. A line outside the items'
    /// indentation that would interrupt a paragraph (heading, fence,
    /// blockquote) also ends the list.
    fn extent(g: &Grammar, s: &str, first: &Marker) -> usize {
        let (_, mut pos) = first_line(s);
        loop {
            let rest = &s[pos..];
            let blanks = rest.len() - rest.trim_start_matches('\n').len();
            let next = pos + blanks;
            if next >= s.len() {
                return pos;
            }
            let (line, len) = first_line(&s[next..]);
            let own_level = indent(line) <= first.indent;

            if own_level && (g.hr.is_match(line) || Definition::scan(g, &s[next..]).is_some()) {
                return pos;
            }
            let indented = indent(line) >= first.min_content_indent();
            if !indented && Marker::parse(g, line).is_none() && Paragraph::interrupted_by(g, line) {
                return pos;
            }
            if blanks >= 2 {
                return pos;
            }
            if blanks == 1 {
                let sibling = Marker::parse(g, line)
                    .is_some_and(|m| m.indent == first.indent && m.delimiter == first.delimiter);
                if !indented && !sibling {
                    return pos;
                }
            }
            pos = next + len;
        }
    }

    /// Removes the bullet and its padding from the first line and up to the
    /// same width of leading spaces from every following line.
    fn item_text(g: &Grammar, item: &str) -> String {
        let mut lines = item.split_inclusive('\n');
        let Some(head) = lines.next() else {
            return String::new();
        };
        let head_body = head.strip_suffix('\n').unwrap_or(head);
        let Some(m) = Marker::parse(g, head_body) else {
            return item.to_string();
        };

        let after_bullet = m.indent + m.len;
        let content = &head[after_bullet..];
        let pad = indent(content);
        let (skip, width) = if content.trim().is_empty() {
            (pad, m.min_content_indent())
        } else if pad > MAX_CONTENT_PAD {
            (1, m.min_content_indent())
        } else {
            (pad, after_bullet + pad)
        };

        let mut text = String::with_capacity(item.len());
        text.push_str(&content[skip..]);
        for line in lines {
            text.push_str(strip_spaces(line, width));
        }
        text
    }
}
