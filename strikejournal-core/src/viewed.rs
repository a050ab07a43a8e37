use std::collections::BTreeSet;

/// Distinct identifiers revealed during this page session.
///
/// The set only grows; there is no way to forget an entry short of
/// building a new tracker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewedTracker {
    viewed: BTreeSet<String>,
}

impl ViewedTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as viewed. Returns `true` the first time an id is seen.
    pub fn mark_viewed(&mut self, id: &str) -> bool {
        if self.viewed.contains(id) {
            return false;
        }
        self.viewed.insert(id.to_owned())
    }

    #[must_use]
    pub fn has_viewed(&self, id: &str) -> bool {
        self.viewed.contains(id)
    }

    /// Completion is an exact match against the total captured at startup.
    #[must_use]
    pub fn is_complete(&self, total: usize) -> bool {
        self.viewed.len() == total
    }

    #[must_use]
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.viewed.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.viewed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_twice_counts_once() {
        let mut viewed = ViewedTracker::new();
        assert!(viewed.mark_viewed("3"));
        assert!(!viewed.mark_viewed("3"));
        assert_eq!(viewed.len(), 1);
        assert!(viewed.has_viewed("3"));
    }

    #[test]
    fn complete_only_when_every_id_seen() {
        let mut viewed = ViewedTracker::new();
        for id in ["1", "2", "3"] {
            viewed.mark_viewed(id);
        }
        assert!(!viewed.is_complete(4));
        assert_eq!(viewed.remaining(4), 1);
        viewed.mark_viewed("2");
        assert!(!viewed.is_complete(4));
        viewed.mark_viewed("4");
        assert!(viewed.is_complete(4));
        assert_eq!(viewed.remaining(4), 0);
    }

    #[test]
    fn empty_tracker_completes_empty_collection() {
        let viewed = ViewedTracker::new();
        assert!(viewed.is_empty());
        assert!(viewed.is_complete(0));
        assert!(!viewed.is_complete(1));
    }
}
