//! Scheduler facade: snapshot cache plus presentation-shaped queries.
//!
//! One instance is bound to one user. A day's bundle is generated at most
//! once and served from the bundle store afterwards; only an explicit
//! reset discards it. Completion events go straight to the history store
//! and influence the next generation, not the stored bundle.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::bundle::{BundleStore, DailyBundle};
use crate::clock::{Clock, DayContext};
use crate::energy::Energy;
use crate::error::Result;
use crate::generator::{GeneratorPolicy, extra_quarterly_tasks, generate_bundle};
use crate::history::{HistoryStore, TaskHistory};

/// Ties the clock, generator, and stores together for one user.
pub struct Scheduler<C: Clock, H: HistoryStore, B: BundleStore> {
    user: String,
    clock: C,
    history: H,
    bundles: B,
    policy: GeneratorPolicy,
}

/// Presentation-shaped view of one day at one energy level. Groups a
/// level does not surface are absent, not empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendations {
    pub energy: Energy,
    pub day_name: String,
    pub date_label: String,
    pub week_focus: String,
    pub week_number: u32,
    pub daily_tasks: Vec<String>,
    pub weekly_tasks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biweekly_tasks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_tasks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarterly_focus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_quarterly_tasks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety_tasks: Option<Vec<String>>,
}

impl<C: Clock, H: HistoryStore, B: BundleStore> Scheduler<C, H, B> {
    pub fn new(user: impl Into<String>, clock: C, history: H, bundles: B) -> Self {
        Self {
            user: user.into(),
            clock,
            history,
            bundles,
            policy: GeneratorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: GeneratorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Today per the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Current history snapshot, for the reporting commands.
    pub fn history_snapshot(&self) -> Result<TaskHistory> {
        self.history.history(&self.user)
    }

    /// Today's bundle: stored if present, else generated and persisted.
    pub fn get_or_create_today(&mut self) -> Result<DailyBundle> {
        let today = self.clock.today();
        if let Some(bundle) = self.bundles.get(&self.user, today)? {
            debug!(user = %self.user, date = %today, "serving stored bundle");
            return Ok(bundle);
        }
        let bundle = self.generate_for(today)?;
        self.bundles.put(&self.user, &bundle)?;
        Ok(bundle)
    }

    /// Discard today's bundle and regenerate from current history.
    /// Completion history is untouched.
    pub fn reset_today(&mut self) -> Result<DailyBundle> {
        let today = self.clock.today();
        self.bundles.delete(&self.user, today)?;
        let bundle = self.generate_for(today)?;
        self.bundles.put(&self.user, &bundle)?;
        Ok(bundle)
    }

    fn generate_for(&self, date: NaiveDate) -> Result<DailyBundle> {
        let ctx = DayContext::for_date(date);
        let history = self.history.history(&self.user)?;
        Ok(generate_bundle(&ctx, &history, &self.policy))
    }

    /// Today's bundle shaped for presentation at one energy level.
    pub fn recommendations(&mut self, energy: Energy) -> Result<Recommendations> {
        let bundle = self.get_or_create_today()?;
        let ctx = DayContext::for_date(bundle.date);
        let mut recs = Recommendations {
            energy,
            day_name: ctx.day_name().to_string(),
            date_label: ctx.date_label(),
            week_focus: ctx.focus.name().to_string(),
            week_number: ctx.iso_week,
            daily_tasks: bundle.daily.for_energy(energy).to_vec(),
            weekly_tasks: bundle.weekly.for_energy(energy).to_vec(),
            biweekly_tasks: None,
            monthly_tasks: None,
            quarterly_focus: None,
            extra_quarterly_tasks: None,
            variety_tasks: None,
        };
        if energy.shows_biweekly() {
            recs.biweekly_tasks = Some(bundle.biweekly);
        }
        if energy.shows_deep_tiers() {
            let history = self.history.history(&self.user)?;
            recs.monthly_tasks = Some(bundle.monthly);
            recs.quarterly_focus = Some(bundle.quarterly);
            recs.extra_quarterly_tasks = Some(extra_quarterly_tasks(&ctx, &history));
            recs.variety_tasks = Some(bundle.variety);
        }
        Ok(recs)
    }

    /// Record a completion of `task` today.
    pub fn mark_completed(&mut self, task: &str, note: Option<&str>) -> Result<()> {
        let today = self.clock.today();
        self.history.record_completion(&self.user, task, today, note)
    }
}
