//! Daily assignment bundle: the per-date snapshot of recommended tasks.
//!
//! A bundle is generated at most once per (user, date) and treated as
//! immutable until an explicit reset. Every tier list is non-empty: it
//! holds due tasks or exactly one celebration sentinel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::energy::Energy;
use crate::error::Result;

/// Celebration sentinels, one per tier. All start with 🎉 so placeholder
/// detection stays a prefix check.
pub const DAILY_SENTINEL: &str = "🎉 No daily tasks needed today!";
pub const WEEKLY_SENTINEL: &str = "🎉 No weekly focus tasks needed today!";
pub const BIWEEKLY_SENTINEL: &str = "🎉 No biweekly tasks needed today!";
pub const MONTHLY_SENTINEL: &str = "🎉 No monthly tasks needed today!";
pub const QUARTERLY_SENTINEL: &str = "🎉 No quarterly focus needed today!";
pub const VARIETY_SENTINEL: &str = "🎉 No variety tasks needed today!";

/// One task list per energy level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergyLists {
    pub red: Vec<String>,
    pub yellow: Vec<String>,
    pub green: Vec<String>,
}

impl EnergyLists {
    /// The list for one energy level.
    pub fn for_energy(&self, energy: Energy) -> &[String] {
        match energy {
            Energy::Red => &self.red,
            Energy::Yellow => &self.yellow,
            Energy::Green => &self.green,
        }
    }
}

/// The full set of recommended tasks for one user on one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyBundle {
    pub date: NaiveDate,
    pub daily: EnergyLists,
    pub weekly: EnergyLists,
    pub biweekly: Vec<String>,
    pub monthly: Vec<String>,
    /// The quarter's focus task, or the quarterly sentinel.
    pub quarterly: String,
    pub variety: Vec<String>,
}

/// Storage for at-most-one bundle per (user, date).
pub trait BundleStore {
    /// Stored bundle for `date`, if any.
    fn get(&self, user: &str, date: NaiveDate) -> Result<Option<DailyBundle>>;

    /// Persist `bundle` under its own date, replacing any previous one.
    fn put(&mut self, user: &str, bundle: &DailyBundle) -> Result<()>;

    /// Discard the bundle for `date`. Absent is not an error.
    fn delete(&mut self, user: &str, date: NaiveDate) -> Result<()>;
}
