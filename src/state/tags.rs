//! Bounded, deduplicated tag list edited by the project-creation form.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

/// Ordered set of unique, trimmed, non-empty tags. Holds at most
/// [`TagSet::MAX_TAGS`] entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub const MAX_TAGS: usize = 5;

    /// Append `candidate` after trimming. Returns `false` without changing
    /// the set when the trimmed candidate is empty, already present, or the
    /// set is full.
    pub fn add(&mut self, candidate: &str) -> bool {
        let tag = candidate.trim();
        if tag.is_empty() || self.is_full() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Remove `tag` if present. Returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= Self::MAX_TAGS
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

/// Keys that commit the pending tag input.
pub fn is_tag_commit_key(key: &str) -> bool {
    key == "Enter" || key == ","
}
