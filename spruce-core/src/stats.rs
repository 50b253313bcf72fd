//! Completion statistics over history snapshots.
//!
//! Everything here is a pure read of `(history, today)`; the reporting
//! commands render these values without recomputing anything.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::catalog::{self, Cadence};
use crate::history::{DATE_FORMAT, TaskHistory};
use crate::urgency::{DaysSince, days_since_completion, is_due, urgency_score};

/// Stats for one task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub task: String,
    pub ever_completed: bool,
    pub completion_count: u32,
    pub last_done: Option<NaiveDate>,
    pub days_since: DaysSince,
}

pub fn task_stats(task: &str, history: &TaskHistory, today: NaiveDate) -> TaskStats {
    match history.get(task) {
        None => TaskStats {
            task: task.to_string(),
            ever_completed: false,
            completion_count: 0,
            last_done: None,
            days_since: DaysSince::Never,
        },
        Some(record) => TaskStats {
            task: task.to_string(),
            ever_completed: true,
            completion_count: record.completion_count,
            last_done: record.last_done_date(),
            days_since: days_since_completion(task, history, today),
        },
    }
}

/// Consecutive calendar days ending today with at least one logged
/// completion. Unparsable log dates are skipped.
pub fn current_streak(history: &TaskHistory, today: NaiveDate) -> u32 {
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    for record in history.values() {
        for entry in &record.completion_log {
            if let Ok(date) = NaiveDate::parse_from_str(&entry.date, DATE_FORMAT) {
                dates.insert(date);
            }
        }
    }
    let mut streak = 0;
    let mut cursor = today;
    while dates.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}

/// Per-cadence counts over the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CadenceStats {
    pub total: usize,
    pub completed: usize,
    pub due: usize,
}

/// Aggregate numbers behind the stats display.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_completions: u32,
    pub unique_tasks: usize,
    pub most_completed: Option<(String, u32)>,
    pub current_streak: u32,
    pub by_cadence: Vec<(Cadence, CadenceStats)>,
}

pub fn overview(history: &TaskHistory, today: NaiveDate) -> Overview {
    let total_completions = history.values().map(|r| r.completion_count).sum();

    let mut by_count: Vec<_> = history.iter().collect();
    by_count.sort_by(|a, b| {
        b.1.completion_count
            .cmp(&a.1.completion_count)
            .then_with(|| a.0.cmp(b.0))
    });
    let most_completed = by_count
        .first()
        .filter(|(_, record)| record.completion_count > 0)
        .map(|(task, record)| ((*task).clone(), record.completion_count));

    let mut by_cadence = Vec::with_capacity(Cadence::ALL.len());
    for cadence in Cadence::ALL {
        let mut stats = CadenceStats::default();
        for def in catalog::all_tasks().filter(|t| t.cadence == cadence) {
            stats.total += 1;
            if history.contains_key(def.name) {
                stats.completed += 1;
            }
            if is_due(def.name, history, today) {
                stats.due += 1;
            }
        }
        by_cadence.push((cadence, stats));
    }

    Overview {
        total_completions,
        unique_tasks: history.len(),
        most_completed,
        current_streak: current_streak(history, today),
        by_cadence,
    }
}

/// One row of the history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub task: String,
    pub last_done: NaiveDate,
    pub days_since: i64,
    pub completion_count: u32,
    pub cadence: Option<Cadence>,
    pub due: bool,
}

/// Completed tasks sorted most recent first. Records whose stored date
/// does not parse are left out; they carry no usable recency.
pub fn history_rows(history: &TaskHistory, today: NaiveDate) -> Vec<HistoryRow> {
    let mut rows: Vec<HistoryRow> = history
        .iter()
        .filter_map(|(task, record)| {
            let last_done = record.last_done_date()?;
            Some(HistoryRow {
                task: task.clone(),
                last_done,
                days_since: (today - last_done).num_days(),
                completion_count: record.completion_count,
                cadence: catalog::find(task).map(|def| def.cadence),
                due: is_due(task, history, today),
            })
        })
        .collect();
    rows.sort_by(|a, b| b.last_done.cmp(&a.last_done).then_with(|| a.task.cmp(&b.task)));
    rows
}

/// Every currently-due catalog task with its score, most urgent first.
pub fn overdue_tasks(history: &TaskHistory, today: NaiveDate) -> Vec<(String, f64)> {
    let mut due: Vec<(String, f64)> = catalog::all_tasks()
        .filter(|def| is_due(def.name, history, today))
        .map(|def| (def.name.to_string(), urgency_score(def.name, history, today)))
        .collect();
    due.sort_by(|a, b| b.1.total_cmp(&a.1));
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{CompletionEntry, CompletionRecord};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with_log(last_done: &str, count: u32, log_dates: &[&str]) -> CompletionRecord {
        CompletionRecord {
            last_done: last_done.to_string(),
            completion_count: count,
            completion_log: log_dates
                .iter()
                .map(|d| CompletionEntry {
                    date: d.to_string(),
                    note: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_task_stats_never_and_completed() {
        let today = day(2026, 4, 6);
        let mut history = TaskHistory::new();
        history.insert(
            "Scoop cat litter".to_string(),
            record_with_log("2026-04-01", 7, &["2026-04-01"]),
        );

        let stats = task_stats("Scoop cat litter", &history, today);
        assert!(stats.ever_completed);
        assert_eq!(stats.completion_count, 7);
        assert_eq!(stats.days_since, DaysSince::Days(5));

        let stats = task_stats("Rotate mattress", &history, today);
        assert!(!stats.ever_completed);
        assert_eq!(stats.days_since, DaysSince::Never);
        assert_eq!(stats.last_done, None);
    }

    #[test]
    fn test_streak_counts_consecutive_days_ending_today() {
        let today = day(2026, 4, 6);
        let mut history = TaskHistory::new();
        history.insert(
            "Scoop cat litter".to_string(),
            record_with_log("2026-04-06", 3, &["2026-04-04", "2026-04-05", "2026-04-06"]),
        );
        history.insert(
            "Unload dishwasher".to_string(),
            record_with_log("2026-04-01", 1, &["2026-04-01"]),
        );
        assert_eq!(current_streak(&history, today), 3);
    }

    #[test]
    fn test_streak_zero_without_today() {
        let today = day(2026, 4, 6);
        let mut history = TaskHistory::new();
        history.insert(
            "Scoop cat litter".to_string(),
            record_with_log("2026-04-05", 2, &["2026-04-04", "2026-04-05"]),
        );
        assert_eq!(current_streak(&history, today), 0);
    }

    #[test]
    fn test_streak_skips_unparsable_log_dates() {
        let today = day(2026, 4, 6);
        let mut history = TaskHistory::new();
        history.insert(
            "Scoop cat litter".to_string(),
            record_with_log("2026-04-06", 2, &["yesterday-ish", "2026-04-06"]),
        );
        assert_eq!(current_streak(&history, today), 1);
    }

    #[test]
    fn test_overview_counts_and_most_completed() {
        let today = day(2026, 4, 6);
        let mut history = TaskHistory::new();
        history.insert(
            "Scoop cat litter".to_string(),
            record_with_log("2026-04-06", 9, &["2026-04-06"]),
        );
        history.insert(
            "Water houseplants".to_string(),
            record_with_log("2026-04-01", 4, &["2026-04-01"]),
        );

        let overview = overview(&history, today);
        assert_eq!(overview.total_completions, 13);
        assert_eq!(overview.unique_tasks, 2);
        assert_eq!(
            overview.most_completed,
            Some(("Scoop cat litter".to_string(), 9))
        );
        assert_eq!(overview.current_streak, 1);

        // The catalog splits 18/25/16/12/17 across the five cadences.
        let totals: Vec<usize> = overview.by_cadence.iter().map(|(_, s)| s.total).collect();
        assert_eq!(totals, vec![18, 25, 16, 12, 17]);
        let total: usize = totals.iter().sum();
        assert_eq!(total, catalog::all_tasks().count());

        let daily = overview.by_cadence[0].1;
        assert_eq!(daily.completed, 1);
        // Everything but the fresh litter scoop is due.
        assert_eq!(daily.due, daily.total - 1);
    }

    #[test]
    fn test_history_rows_most_recent_first() {
        let today = day(2026, 4, 6);
        let mut history = TaskHistory::new();
        history.insert(
            "Water houseplants".to_string(),
            record_with_log("2026-03-25", 1, &["2026-03-25"]),
        );
        history.insert(
            "Scoop cat litter".to_string(),
            record_with_log("2026-04-05", 2, &["2026-04-05"]),
        );
        history.insert(
            "Mystery chore".to_string(),
            record_with_log("whenever", 1, &[]),
        );

        let rows = history_rows(&history, today);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task, "Scoop cat litter");
        assert_eq!(rows[0].days_since, 1);
        assert!(!rows[0].due);
        // Twelve days past a ten-day threshold.
        assert_eq!(rows[1].task, "Water houseplants");
        assert!(rows[1].due);
        assert_eq!(rows[1].cadence, Some(Cadence::Weekly));
    }

    #[test]
    fn test_overdue_tasks_sorted_by_score() {
        let today = day(2026, 4, 6);
        let history = TaskHistory::new();
        let due = overdue_tasks(&history, today);
        // Empty history: the whole catalog is due.
        assert_eq!(due.len(), catalog::all_tasks().count());
        for pair in due.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
