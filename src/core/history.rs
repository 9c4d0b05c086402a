//! Calculation history tracking.
//!
//! Provides an immutable, most-recent-first log of completed calculations.
//! Entries are never edited in place; the log only grows by `record` or is
//! replaced wholesale by `cleared`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed calculation.
///
/// The summary is the full equation text, e.g. `"5 + 3 = 8"`. Entries are
/// immutable once recorded.
///
/// # Example
///
/// ```rust
/// use reckoner::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("5 + 3 = 8");
/// assert_eq!(entry.summary, "5 + 3 = 8");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Full equation text of the completed calculation
    pub summary: String,
    /// When the calculation completed
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry timestamped now.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Most-recent-first log of completed calculations.
///
/// History is immutable - `record` and `cleared` return a new history,
/// following functional programming principles. The log is unbounded and
/// only emptied by an explicit clear, never by resetting the calculator.
///
/// # Example
///
/// ```rust
/// use reckoner::core::{History, HistoryEntry};
///
/// let history = History::new();
/// let history = history.record(HistoryEntry::new("5 + 3 = 8"));
/// let history = history.record(HistoryEntry::new("7 / 0 = 0"));
///
/// // newest first
/// let summaries: Vec<&str> = history.summaries().collect();
/// assert_eq!(summaries, vec!["7 / 0 = 0", "5 + 3 = 8"]);
///
/// assert!(history.cleared().is_empty());
/// assert_eq!(history.len(), 2); // original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry at the front, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry prepended.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// Return an emptied history, leaving this one untouched.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterate over summary strings, newest first.
    pub fn summaries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.summary.as_str())
    }

    /// The most recently recorded entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
