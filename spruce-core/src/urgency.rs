//! Urgency engine: due-ness and scoring over completion history.
//!
//! Policy:
//! - a task is due once `days_since >= cadence threshold`, or when it has
//!   never been completed
//! - `score = max(0.1, days_since / threshold) * priority weight`
//! - never-done tasks score the fixed `NEVER_DONE_SCORE`
//! - names missing from the catalog score with threshold 10 / weight 1.0
//!   and log a warning
//!
//! All functions are pure over `(name, history, today)` and never fail:
//! malformed stored dates read as "never done."

use chrono::NaiveDate;
use tracing::warn;

use crate::catalog::{self, REST_DAY};
use crate::history::TaskHistory;

/// Fixed finite score for never-done tasks: twice the maximum priority
/// weight, so they outrank anything completed recently while keeping
/// sorts total and display bands finite.
pub const NEVER_DONE_SCORE: f64 = 6.0;

/// Floor on the cadence-elapsed ratio. Keeps freshly completed tasks at a
/// nonzero score so relative ordering among them still follows weight.
pub const SCORE_FLOOR: f64 = 0.1;

const FALLBACK_THRESHOLD_DAYS: i64 = 10;
const FALLBACK_WEIGHT: f64 = 1.0;

/// Elapsed days since a task's last completion. `Never` covers a missing
/// record, an empty date, and an unparsable date.
///
/// Variant order drives the derived ordering: any `Days` sorts below
/// `Never`, so `Never` is the most overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DaysSince {
    Days(i64),
    Never,
}

impl DaysSince {
    pub fn is_never(&self) -> bool {
        matches!(self, DaysSince::Never)
    }
}

/// True for display placeholders (celebration sentinels, the rest day)
/// that must never come due or score.
pub fn is_placeholder(name: &str) -> bool {
    name.starts_with("🎉") || name == REST_DAY
}

/// Days since `task` was last completed as of `today`.
pub fn days_since_completion(task: &str, history: &TaskHistory, today: NaiveDate) -> DaysSince {
    let Some(record) = history.get(task) else {
        return DaysSince::Never;
    };
    match record.last_done_date() {
        Some(done) => DaysSince::Days((today - done).num_days()),
        None => DaysSince::Never,
    }
}

fn policy_for(task: &str) -> (i64, f64) {
    match catalog::find(task) {
        Some(def) => (def.cadence.threshold_days(), def.priority.weight()),
        None => {
            warn!(task, "no catalog entry; scoring with fallback threshold and weight");
            (FALLBACK_THRESHOLD_DAYS, FALLBACK_WEIGHT)
        }
    }
}

/// Whether `task` is due as of `today`. Placeholders are never due;
/// never-completed tasks always are.
pub fn is_due(task: &str, history: &TaskHistory, today: NaiveDate) -> bool {
    if is_placeholder(task) {
        return false;
    }
    let (threshold, _) = policy_for(task);
    match days_since_completion(task, history, today) {
        DaysSince::Never => true,
        DaysSince::Days(days) => days >= threshold,
    }
}

/// Priority-weighted overdue-ness. Placeholders score 0.
pub fn urgency_score(task: &str, history: &TaskHistory, today: NaiveDate) -> f64 {
    if is_placeholder(task) {
        return 0.0;
    }
    let (threshold, weight) = policy_for(task);
    match days_since_completion(task, history, today) {
        DaysSince::Never => NEVER_DONE_SCORE,
        DaysSince::Days(days) => {
            let ratio = days as f64 / threshold as f64;
            ratio.max(SCORE_FLOOR) * weight
        }
    }
}

/// Display classification for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyBand {
    High,
    Medium,
    Low,
}

impl UrgencyBand {
    /// Band cut-offs: above 3 is high, above 1.5 medium.
    pub fn from_score(score: f64) -> UrgencyBand {
        if score > 3.0 {
            UrgencyBand::High
        } else if score > 1.5 {
            UrgencyBand::Medium
        } else {
            UrgencyBand::Low
        }
    }

    /// Marker used in terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyBand::High => "🔥 HIGH",
            UrgencyBand::Medium => "⚠️ MEDIUM",
            UrgencyBand::Low => "✓ LOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::CompletionRecord;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history_with(task: &str, last_done: &str) -> TaskHistory {
        let mut history = TaskHistory::new();
        history.insert(
            task.to_string(),
            CompletionRecord {
                last_done: last_done.to_string(),
                completion_count: 1,
                completion_log: vec![],
            },
        );
        history
    }

    #[test]
    fn test_litter_five_days_ago() {
        // Daily cadence, threshold 3, weight 3.0: (5/3) * 3.0 = 5.0.
        let today = day(2026, 4, 6);
        let history = history_with("Scoop cat litter", "2026-04-01");
        assert_eq!(
            days_since_completion("Scoop cat litter", &history, today),
            DaysSince::Days(5)
        );
        assert!(is_due("Scoop cat litter", &history, today));
        let score = urgency_score("Scoop cat litter", &history, today);
        assert!((score - 5.0).abs() < 1e-9);
        assert_eq!(UrgencyBand::from_score(score), UrgencyBand::High);
    }

    #[test]
    fn test_never_done_is_due_with_fixed_score() {
        let today = day(2026, 4, 6);
        let history = TaskHistory::new();
        for task in ["Scoop cat litter", "Water houseplants", "Rotate mattress"] {
            assert!(days_since_completion(task, &history, today).is_never());
            assert!(is_due(task, &history, today));
            assert_eq!(urgency_score(task, &history, today), NEVER_DONE_SCORE);
        }
    }

    #[test]
    fn test_malformed_date_reads_as_never_done() {
        let today = day(2026, 4, 6);
        let history = history_with("Water houseplants", "last tuesday");
        assert!(days_since_completion("Water houseplants", &history, today).is_never());
        assert!(is_due("Water houseplants", &history, today));
        assert_eq!(urgency_score("Water houseplants", &history, today), NEVER_DONE_SCORE);
    }

    #[test]
    fn test_fresh_completion_not_due_but_floored() {
        let today = day(2026, 4, 6);
        let history = history_with("Scoop cat litter", "2026-04-06");
        assert!(!is_due("Scoop cat litter", &history, today));
        // Ratio 0 floors at 0.1, times weight 3.0.
        let score = urgency_score("Scoop cat litter", &history, today);
        assert!((score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn floor_invariant_holds_across_catalog() {
        let today = day(2026, 4, 6);
        for def in catalog::all_tasks() {
            let history = history_with(def.name, "2026-04-06");
            let score = urgency_score(def.name, &history, today);
            assert!(
                score >= SCORE_FLOOR * def.priority.weight() - 1e-12,
                "floor violated for {}",
                def.name
            );
        }
    }

    #[test]
    fn test_due_boundary_is_inclusive() {
        let today = day(2026, 4, 6);
        // Weekly threshold 10: done exactly 10 days ago is due.
        let history = history_with("Water houseplants", "2026-03-27");
        assert!(is_due("Water houseplants", &history, today));
        // 9 days ago is not.
        let history = history_with("Water houseplants", "2026-03-28");
        assert!(!is_due("Water houseplants", &history, today));
    }

    #[test]
    fn test_unknown_name_uses_fallback_policy() {
        let today = day(2026, 4, 6);
        // Fallback threshold 10, weight 1.0.
        let history = history_with("Polish the doorbell", "2026-03-27");
        assert!(is_due("Polish the doorbell", &history, today));
        let score = urgency_score("Polish the doorbell", &history, today);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_placeholders_never_due() {
        let today = day(2026, 4, 6);
        let history = TaskHistory::new();
        assert!(!is_due("🎉 No biweekly tasks needed today!", &history, today));
        assert!(!is_due(REST_DAY, &history, today));
        assert_eq!(urgency_score(REST_DAY, &history, today), 0.0);
    }

    #[test]
    fn test_days_since_ordering() {
        assert!(DaysSince::Never > DaysSince::Days(10_000));
        assert!(DaysSince::Days(5) > DaysSince::Days(4));
        assert_eq!(DaysSince::Never, DaysSince::Never);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(UrgencyBand::from_score(5.0), UrgencyBand::High);
        assert_eq!(UrgencyBand::from_score(3.0), UrgencyBand::Medium);
        assert_eq!(UrgencyBand::from_score(1.6), UrgencyBand::Medium);
        assert_eq!(UrgencyBand::from_score(1.5), UrgencyBand::Low);
        assert_eq!(UrgencyBand::from_score(0.3), UrgencyBand::Low);
    }
}
