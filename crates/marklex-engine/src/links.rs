//! The per-document link-reference table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Destination and title of one `[label]: href "title"` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Reference definitions keyed by normalized label.
///
/// Filled during the block pass, read-only during the inline pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRefs(BTreeMap<String, LinkRef>);

impl LinkRefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition. The first definition of a label wins; returns
    /// false if the label was already defined.
    pub fn define(&mut self, label: &str, link: LinkRef) -> bool {
        let key = normalize_label(label);
        if key.is_empty() || self.0.contains_key(&key) {
            return false;
        }
        self.0.insert(key, link);
        true
    }

    /// Looks up a label as written at the usage site.
    pub fn resolve(&self, label: &str) -> Option<&LinkRef> {
        self.0.get(&normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkRef)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Case-folds a label and collapses internal whitespace runs to one space.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str) -> LinkRef {
        LinkRef {
            href: href.into(),
            title: None,
        }
    }

    #[test]
    fn normalize_folds_case_and_whitespace() {
        assert_eq!(normalize_label("  Foo \n  BAR "), "foo bar");
    }

    #[test]
    fn first_definition_wins() {
        let mut refs = LinkRefs::new();
        assert!(refs.define("Foo", link("/first")));
        assert!(!refs.define("foo", link("/second")));
        assert_eq!(refs.resolve("FOO").map(|l| l.href.as_str()), Some("/first"));
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn blank_labels_are_rejected() {
        let mut refs = LinkRefs::new();
        assert!(!refs.define("   ", link("/x")));
        assert!(refs.is_empty());
    }

    #[test]
    fn resolve_matches_across_line_breaks() {
        let mut refs = LinkRefs::new();
        refs.define("link text", link("/t"));
        assert!(refs.resolve("Link\ntext").is_some());
        assert!(refs.resolve("missing").is_none());
    }
}
