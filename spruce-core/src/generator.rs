//! Daily assignment generator.
//!
//! Pure function of (day context, history snapshot, policy). Every tier
//! follows one pattern: gather candidates in catalog order, keep the due
//! ones, fall back to the tier's celebration sentinel when nothing is
//! left, stable-sort by urgency descending (so catalog order breaks
//! ties), and truncate to the tier cap.

use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::bundle::{
    BIWEEKLY_SENTINEL, DAILY_SENTINEL, DailyBundle, EnergyLists, MONTHLY_SENTINEL,
    QUARTERLY_SENTINEL, VARIETY_SENTINEL, WEEKLY_SENTINEL,
};
use crate::catalog::{self, Cadence, PriorityClass, REST_DAY};
use crate::clock::DayContext;
use crate::energy::Energy;
use crate::history::TaskHistory;
use crate::urgency::{DaysSince, days_since_completion, is_due, urgency_score};

const BIWEEKLY_CAP: usize = 4;
const MONTHLY_CAP: usize = 5;
const VARIETY_CAP: usize = 10;
const EXTRA_QUARTERLY_CAP: usize = 5;

/// Generation knobs carried from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorPolicy {
    /// Offer the weekday essential even when it is not due.
    pub always_show_essential: bool,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            always_show_essential: true,
        }
    }
}

/// Build the complete bundle for one day.
pub fn generate_bundle(
    ctx: &DayContext,
    history: &TaskHistory,
    policy: &GeneratorPolicy,
) -> DailyBundle {
    debug!(
        date = %ctx.date,
        week = ctx.iso_week,
        focus = ctx.focus.name(),
        "generating daily bundle"
    );
    let biweekly = biweekly_tasks(ctx, history);
    let variety = variety_tasks(history, ctx.date, &biweekly);
    DailyBundle {
        date: ctx.date,
        daily: EnergyLists {
            red: daily_tasks(ctx, history, Energy::Red, policy),
            yellow: daily_tasks(ctx, history, Energy::Yellow, policy),
            green: daily_tasks(ctx, history, Energy::Green, policy),
        },
        weekly: EnergyLists {
            red: weekly_focus_tasks(ctx, history, Energy::Red),
            yellow: weekly_focus_tasks(ctx, history, Energy::Yellow),
            green: weekly_focus_tasks(ctx, history, Energy::Green),
        },
        biweekly,
        monthly: monthly_tasks(history, ctx.date),
        quarterly: quarterly_focus(ctx, history),
        variety,
    }
}

/// Keep the due candidates and order them most urgent first. Candidates
/// arrive in catalog order; the stable sort preserves it across ties.
fn rank_due<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    history: &TaskHistory,
    today: NaiveDate,
) -> Vec<String> {
    let mut due: Vec<(&str, f64)> = candidates
        .into_iter()
        .filter(|task| is_due(task, history, today))
        .map(|task| (task, urgency_score(task, history, today)))
        .collect();
    due.sort_by(|a, b| b.1.total_cmp(&a.1));
    due.into_iter().map(|(task, _)| task.to_string()).collect()
}

fn daily_tasks(
    ctx: &DayContext,
    history: &TaskHistory,
    energy: Energy,
    policy: &GeneratorPolicy,
) -> Vec<String> {
    if ctx.weekday == Weekday::Sun {
        return vec![REST_DAY.to_string()];
    }
    let essential = catalog::essential_task(ctx.weekday);
    let mut tasks = Vec::new();
    if policy.always_show_essential || is_due(essential, history, ctx.date) {
        tasks.push(essential.to_string());
    }
    let pool = catalog::REGULAR_TASKS
        .iter()
        .filter(|def| def.priority == PriorityClass::P1Core)
        .map(|def| def.name)
        .filter(|name| *name != essential);
    let mut bonus = rank_due(pool, history, ctx.date);
    bonus.truncate(energy.daily_bonus_cap());
    tasks.extend(bonus);
    if tasks.is_empty() {
        return vec![DAILY_SENTINEL.to_string()];
    }
    tasks
}

fn weekly_focus_tasks(ctx: &DayContext, history: &TaskHistory, energy: Energy) -> Vec<String> {
    let mut tasks = rank_due(ctx.focus.tasks().iter().copied(), history, ctx.date);
    if tasks.is_empty() {
        return vec![WEEKLY_SENTINEL.to_string()];
    }
    if let Some(cap) = energy.weekly_cap() {
        tasks.truncate(cap);
    }
    tasks
}

fn biweekly_tasks(ctx: &DayContext, history: &TaskHistory) -> Vec<String> {
    let mut tasks = rank_due(ctx.phase.tasks().iter().copied(), history, ctx.date);
    if tasks.is_empty() {
        return vec![BIWEEKLY_SENTINEL.to_string()];
    }
    tasks.truncate(BIWEEKLY_CAP);
    tasks
}

fn monthly_tasks(history: &TaskHistory, today: NaiveDate) -> Vec<String> {
    let pool = catalog::all_tasks()
        .filter(|def| def.cadence == Cadence::Monthly)
        .map(|def| def.name);
    let mut tasks = rank_due(pool, history, today);
    if tasks.is_empty() {
        return vec![MONTHLY_SENTINEL.to_string()];
    }
    tasks.truncate(MONTHLY_CAP);
    tasks
}

fn quarterly_focus(ctx: &DayContext, history: &TaskHistory) -> String {
    let focus = catalog::quarterly_focus(ctx.quarter);
    if is_due(focus, history, ctx.date) {
        focus.to_string()
    } else {
        QUARTERLY_SENTINEL.to_string()
    }
}

fn variety_tasks(history: &TaskHistory, today: NaiveDate, exclude: &[String]) -> Vec<String> {
    let pool = catalog::REGULAR_TASKS
        .iter()
        .filter(|def| {
            matches!(
                def.priority,
                PriorityClass::P2Upkeep | PriorityClass::P3Detail
            )
        })
        .map(|def| def.name)
        .filter(|name| !exclude.iter().any(|picked| picked == name));
    let mut tasks = rank_due(pool, history, today);
    if tasks.is_empty() {
        return vec![VARIETY_SENTINEL.to_string()];
    }
    tasks.truncate(VARIETY_CAP);
    tasks
}

/// Overdue quarterly-cadence tasks beyond the current focus, most overdue
/// first. Computed live at recommendation time rather than stored.
pub fn extra_quarterly_tasks(ctx: &DayContext, history: &TaskHistory) -> Vec<String> {
    let focus = catalog::quarterly_focus(ctx.quarter);
    let mut overdue: Vec<(&str, DaysSince)> = catalog::all_tasks()
        .filter(|def| def.cadence == Cadence::Quarterly && def.name != focus)
        .filter(|def| is_due(def.name, history, ctx.date))
        .map(|def| (def.name, days_since_completion(def.name, history, ctx.date)))
        .collect();
    overdue.sort_by(|a, b| b.1.cmp(&a.1));
    overdue.truncate(EXTRA_QUARTERLY_CAP);
    overdue.into_iter().map(|(task, _)| task.to_string()).collect()
}
