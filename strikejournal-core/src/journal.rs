use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const STATIC_JOURNAL: &str = include_str!("../data/journal.json");

static EMBEDDED: Lazy<JournalStore> =
    Lazy::new(|| JournalStore::from_json(STATIC_JOURNAL).unwrap_or_default());

/// A single journal entry revealed by a grid item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub content: String,
}

impl JournalEntry {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only lookup from item identifier to entry content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct JournalStore {
    entries: BTreeMap<String, JournalEntry>,
}

impl JournalStore {
    /// Parse a journal document of the form `{"<id>": {"content": "..."}}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into journal entries.
    pub fn from_json(json: &str) -> Result<Self, JournalError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The journal table compiled into the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        EMBEDDED.clone()
    }

    #[must_use]
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, JournalEntry)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Look up an entry; unknown identifiers yield `None`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_has_eight_entries() {
        let store = JournalStore::from_json(STATIC_JOURNAL).expect("embedded journal parses");
        assert_eq!(store.len(), 8);
        let ids: Vec<_> = store.ids().collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(store.ids().all(|id| !store.get(id).unwrap().content.is_empty()));
        assert_eq!(JournalStore::load_from_static(), store);
    }

    #[test]
    fn first_entry_matches_day_one() {
        let store = JournalStore::load_from_static();
        let entry = store.get("1").unwrap();
        assert!(entry.content.starts_with("The first day was difficult."));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let store = JournalStore::load_from_static();
        assert!(store.get("9").is_none());
        assert!(store.get("").is_none());
        assert!(!store.contains(" 1"));
    }

    #[test]
    fn malformed_json_reports_error() {
        let err = JournalStore::from_json("{\"1\": \"missing content object\"}")
            .expect_err("string values are not entries");
        assert!(format!("{err}").contains("not valid JSON"));
    }

    #[test]
    fn from_entries_builds_lookup() {
        let store = JournalStore::from_entries([
            ("a", JournalEntry::new("alpha")),
            ("b", JournalEntry::new("beta")),
        ]);
        assert_eq!(store.get("b").map(|e| e.content.as_str()), Some("beta"));
        assert!(!store.is_empty());
    }
}
