//! Completion records and the history store trait.
//!
//! Records are created on first completion and only ever appended to.
//! The urgency engine reads them and never writes. `last_done` stays
//! textual at the storage boundary; parsing is lenient and a bad date
//! simply reads as "never done."

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Date format used everywhere at the storage boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One logged completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionEntry {
    /// Completion date (YYYY-MM-DD).
    pub date: String,
    /// Free-text note attached by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Per-task completion state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompletionRecord {
    /// Most recent completion date (YYYY-MM-DD); empty when never done.
    #[serde(default)]
    pub last_done: String,
    /// Total completions, monotonically non-decreasing.
    #[serde(default)]
    pub completion_count: u32,
    /// Append-only log; feeds streaks and stats, never scoring.
    #[serde(default)]
    pub completion_log: Vec<CompletionEntry>,
}

impl CompletionRecord {
    /// Apply one completion on `date`.
    pub fn record(&mut self, date: NaiveDate, note: Option<String>) {
        let stamp = date.format(DATE_FORMAT).to_string();
        self.last_done = stamp.clone();
        self.completion_count += 1;
        self.completion_log.push(CompletionEntry { date: stamp, note });
    }

    /// Parsed last-done date; `None` when never done or unparsable.
    pub fn last_done_date(&self) -> Option<NaiveDate> {
        if self.last_done.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(&self.last_done, DATE_FORMAT).ok()
    }
}

/// All of one user's records, keyed by task name.
pub type TaskHistory = HashMap<String, CompletionRecord>;

/// Read/append access to per-user completion history.
pub trait HistoryStore {
    /// Full history snapshot for `user`.
    fn history(&self, user: &str) -> Result<TaskHistory>;

    /// Record a completion of `task` on `on`, creating the record if new.
    fn record_completion(
        &mut self,
        user: &str,
        task: &str,
        on: NaiveDate,
        note: Option<&str>,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_all_fields() {
        let mut record = CompletionRecord::default();
        let day = NaiveDate::from_ymd_opt(2026, 4, 6).unwrap();
        record.record(day, Some("used the new brush".to_string()));
        assert_eq!(record.last_done, "2026-04-06");
        assert_eq!(record.completion_count, 1);
        assert_eq!(record.completion_log.len(), 1);
        assert_eq!(record.completion_log[0].date, "2026-04-06");

        record.record(day.succ_opt().unwrap(), None);
        assert_eq!(record.last_done, "2026-04-07");
        assert_eq!(record.completion_count, 2);
        assert_eq!(record.completion_log.len(), 2);
        assert_eq!(record.last_done_date(), NaiveDate::from_ymd_opt(2026, 4, 7));
    }

    #[test]
    fn test_last_done_date_lenient() {
        let record = CompletionRecord {
            last_done: "not-a-date".to_string(),
            completion_count: 1,
            completion_log: vec![],
        };
        assert_eq!(record.last_done_date(), None);
        assert_eq!(CompletionRecord::default().last_done_date(), None);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut record = CompletionRecord::default();
        record.record(NaiveDate::from_ymd_opt(2026, 4, 6).unwrap(), None);
        let raw = serde_json::to_string(&record).unwrap();
        let back: CompletionRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, record);
        // Notes are omitted from the wire when absent.
        assert!(!raw.contains("note"));
    }
}
