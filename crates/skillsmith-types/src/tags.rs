use serde::{Deserialize, Serialize};

/// Ordered tag list that drops duplicates on insertion
///
/// The first occurrence of a tag keeps its position; later pushes of the same
/// tag are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag unless it is empty or already present.
    /// Returns whether the tag was added.
    pub fn push(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.is_empty() || self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Tags joined with `sep`, in insertion order
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        tags.extend(iter);
        tags
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.push(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut tags = TagSet::new();
        assert!(tags.push("azure"));
        assert!(tags.push("functions"));
        assert!(!tags.push("azure"));
        assert!(!tags.push(""));

        assert_eq!(tags.join(", "), "azure, functions");
    }

    #[test]
    fn test_collect_suppresses_duplicates() {
        let tags: TagSet = ["a", "b", "a", "c", "b"].into_iter().collect();
        assert_eq!(tags.as_slice(), ["a", "b", "c"]);
        assert_eq!(tags.len(), 3);
    }
}
