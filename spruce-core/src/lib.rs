//! spruce-core: decision engine for the Spruce cleaning scheduler
//!
//! The engine decides, for a date and a self-reported energy level, which
//! catalog tasks are due, how urgent each one is, and how many to offer
//! at each cadence tier. Store access goes through the `HistoryStore` and
//! `BundleStore` traits; everything else is pure.

pub mod error;
pub mod catalog;
pub mod energy;
pub mod history;
pub mod clock;
pub mod urgency;
pub mod bundle;
pub mod generator;
pub mod stats;
pub mod scheduler;

pub use error::{Result, StoreError};
pub use catalog::{
    BiweeklyPhase, Cadence, DurationBucket, FocusArea, PriorityClass, REST_DAY, TaskDef,
    essential_task, quarterly_focus,
};
pub use energy::Energy;
pub use history::{CompletionEntry, CompletionRecord, DATE_FORMAT, HistoryStore, TaskHistory};
pub use clock::{Clock, DayContext, FixedClock, SystemClock};
pub use urgency::{
    DaysSince, NEVER_DONE_SCORE, UrgencyBand, days_since_completion, is_due, is_placeholder,
    urgency_score,
};
pub use bundle::{BundleStore, DailyBundle, EnergyLists};
pub use generator::{GeneratorPolicy, extra_quarterly_tasks, generate_bundle};
pub use stats::{
    CadenceStats, HistoryRow, Overview, TaskStats, current_streak, history_rows, overdue_tasks,
    overview, task_stats,
};
pub use scheduler::{Recommendations, Scheduler};
