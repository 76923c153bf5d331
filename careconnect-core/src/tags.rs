//! The tag editor backing the free-text tag control on the program form.

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of free-text labels. State is owned by the
/// form; there is no lifecycle beyond it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Trims and appends. Empty input (after trimming) and tags already
    /// present (case-sensitive exact match) are ignored.
    pub fn add(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() || self.0.iter().any(|existing| existing == tag) {
            return;
        }
        self.0.push(tag.to_owned());
    }

    /// Removes the tag if present; removing an absent tag is a no-op.
    pub fn remove(&mut self, tag: &str) {
        self.0.retain(|existing| existing != tag);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_add_is_ignored() {
        let mut tags = TagList::new();
        tags.add("Dance");
        tags.add("Dance");
        assert_eq!(tags.as_slice(), ["Dance"]);
    }

    #[test]
    fn added_tags_are_trimmed() {
        let mut tags = TagList::new();
        tags.add("  Dance  ");
        assert_eq!(tags.as_slice(), ["Dance"]);
        // trimmed form collides with the existing entry
        tags.add("Dance ");
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn empty_input_is_a_noop() {
        let mut tags = TagList::new();
        tags.add("   ");
        assert!(tags.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut tags = TagList::new();
        tags.add("Music");
        tags.add("Dance");
        tags.add("Games");
        assert_eq!(tags.as_slice(), ["Music", "Dance", "Games"]);
    }

    #[test]
    fn removing_an_absent_tag_is_a_noop() {
        let mut tags = TagList::new();
        tags.add("Dance");
        tags.remove("Music");
        assert_eq!(tags.as_slice(), ["Dance"]);
        tags.remove("Dance");
        assert!(tags.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut tags = TagList::new();
        tags.add("Dance");
        tags.add("dance");
        assert_eq!(tags.as_slice(), ["Dance", "dance"]);
    }
}
