//! Badge collection with set semantics.

use serde::{Deserialize, Deserializer, Serialize};

/// Named achievements held by a user.
///
/// Each name is held at most once. Insertion order is kept only so badges
/// display in the order they were earned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadgeSet(Vec<String>);

impl BadgeSet {
    /// Create an empty badge set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a badge. Returns `false` if it was already held.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Whether the badge is held.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|b| b == name)
    }

    /// Number of distinct badges.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no badges are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate badge names in earn order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BadgeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = BadgeSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

// Duplicates in stored data collapse on load.
impl<'de> Deserialize<'de> for BadgeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut badges = BadgeSet::new();
        assert!(badges.insert("Budget Beginner"));
        assert!(!badges.insert("Budget Beginner"));
        assert_eq!(badges.len(), 1);
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let badges: BadgeSet =
            serde_json::from_str(r#"["Saving Star", "Budget Beginner", "Saving Star"]"#).unwrap();
        assert_eq!(badges.iter().collect::<Vec<_>>(), vec!["Saving Star", "Budget Beginner"]);
    }
}
