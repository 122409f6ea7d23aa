use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of entries retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Bounded interaction log, newest entry first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "HistoryRecord")]
pub struct InteractionHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

/// Wire form; converted through `with_capacity` so the length cap holds.
#[derive(Deserialize)]
struct HistoryRecord {
    entries: VecDeque<String>,
    capacity: usize,
}

impl From<HistoryRecord> for InteractionHistory {
    fn from(record: HistoryRecord) -> Self {
        let mut history = Self::with_capacity(record.capacity);
        history.entries = record.entries;
        history.entries.truncate(history.capacity);
        history
    }
}

impl Default for InteractionHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl InteractionHistory {
    /// `capacity` is raised to 1 if zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepends `entry`, dropping the oldest entries beyond capacity.
    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut history = InteractionHistory::default();
        history.record("first");
        history.record("second");
        assert_eq!(history.latest(), Some("second"));
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["second", "first"]);
    }

    #[test]
    fn test_truncates_to_capacity() {
        let mut history = InteractionHistory::default();
        for i in 0..12 {
            history.record(format!("entry {i}"));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.latest(), Some("entry 11"));
        assert_eq!(history.get(4), Some("entry 7"));
        assert_eq!(history.get(5), None);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut history = InteractionHistory::with_capacity(0);
        history.record("a");
        history.record("b");
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_deserialize_enforces_capacity() {
        let json = r#"{"entries":["a","b","c","d","e","f","g"],"capacity":0}"#;
        let history: InteractionHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some("a"));

        let json = r#"{"entries":["a","b","c","d","e","f","g"],"capacity":5}"#;
        let history: InteractionHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history.get(4), Some("e"));
    }

    #[test]
    fn test_serialize_roundtrip_keeps_entries() {
        let mut history = InteractionHistory::with_capacity(3);
        history.record("first");
        history.record("second");
        let json = serde_json::to_string(&history).unwrap();
        let back: InteractionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn test_clear() {
        let mut history = InteractionHistory::default();
        history.record("a");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}
