//! Console output for the recommendation and reporting commands.
//!
//! Per-task annotations (cadence, last done, urgency band) are looked up
//! against the live history at print time, so the `today` view reflects
//! completions made after the bundle was stored.

use chrono::NaiveDate;
use spruce_core::{
    DaysSince, Energy, Recommendations, TaskHistory, UrgencyBand, catalog, days_since_completion,
    history_rows, is_placeholder, overdue_tasks, overview, urgency_score,
};

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

pub fn energy_banner(energy: Energy) -> &'static str {
    match energy {
        Energy::Red => "🔴 LOW ENERGY DAY",
        Energy::Yellow => "🟡 MODERATE ENERGY DAY",
        Energy::Green => "🟢 GOOD ENERGY DAY",
    }
}

pub fn print_recommendations(recs: &Recommendations, history: &TaskHistory, today: NaiveDate) {
    println!("\n{RULE}");
    println!("     SPRUCE CLEANING RECOMMENDATIONS");
    println!("{RULE}");
    println!("\n{}", energy_banner(recs.energy));
    println!("{}, {}", recs.day_name, recs.date_label);
    println!("Week {} Focus: {}", recs.week_number, recs.week_focus);
    println!("\n{THIN_RULE}");

    // Task numbering runs through all sections.
    let mut n = 0usize;

    println!("\n🔍 DAILY PRIORITY TASKS:");
    for task in &recs.daily_tasks {
        print_task(task, &mut n, history, today);
    }

    if !recs.weekly_tasks.is_empty() {
        println!("\n🔄 WEEKLY FOCUS TASKS:");
        println!("  Focus: {}", recs.week_focus);
        for task in &recs.weekly_tasks {
            print_task(task, &mut n, history, today);
        }
    }

    if let Some(biweekly) = &recs.biweekly_tasks {
        println!("\n📅 BIWEEKLY TASKS:");
        println!("  Choose ONE if energy allows:");
        for task in biweekly {
            print_task(task, &mut n, history, today);
        }
    }

    if let Some(monthly) = &recs.monthly_tasks {
        println!("\n🌟 MONTHLY VISUAL IMPACT TASKS:");
        for task in monthly {
            print_task(task, &mut n, history, today);
        }
    }

    if let Some(quarterly) = &recs.quarterly_focus {
        println!("\n🗓️ QUARTERLY FOCUS:");
        print_task(quarterly, &mut n, history, today);
        if let Some(extra) = &recs.extra_quarterly_tasks {
            if !extra.is_empty() {
                println!("  Also due this quarter:");
                for task in extra {
                    print_task(task, &mut n, history, today);
                }
            }
        }
    }

    if let Some(variety) = &recs.variety_tasks {
        println!("\n✨ VARIETY TASKS:");
        println!("  For when you want something different:");
        for task in variety {
            print_task(task, &mut n, history, today);
        }
    }

    println!("\n{THIN_RULE}");
    println!("💡 REMINDER: Your health comes first!");
    println!("   It's okay to do less or nothing at all.");
    println!("{RULE}\n");
}

/// One numbered entry with its annotation line. Sentinels and the rest
/// day print bare and unnumbered.
fn print_task(task: &str, n: &mut usize, history: &TaskHistory, today: NaiveDate) {
    if is_placeholder(task) {
        println!("  {task}");
        return;
    }
    *n += 1;

    let days = days_since_completion(task, history, today);
    let last_done = match days {
        DaysSince::Never => "Never".to_string(),
        DaysSince::Days(d) => format!("{d} days ago"),
    };
    let marker = if days == DaysSince::Days(0) { " ✅" } else { "" };

    match catalog::find(task) {
        Some(def) => {
            let band = UrgencyBand::from_score(urgency_score(task, history, today));
            println!(
                "  {n}. {task} ({}, {}){marker}",
                def.duration.label(),
                def.cadence.label()
            );
            println!("     Last done: {last_done} | Urgency: {}", band.label());
        }
        None => {
            println!("  {n}. {task}{marker}");
            println!("     Last done: {last_done}");
        }
    }
}

pub fn print_history(history: &TaskHistory, today: NaiveDate) {
    println!("\n{RULE}");
    println!("       CLEANING TASK HISTORY");
    println!("{RULE}\n");

    let rows = history_rows(history, today);
    if rows.is_empty() {
        println!("No task history found. Start completing tasks to build history!");
        return;
    }

    println!(
        "{:<40} | {:<12} | {:<5} | {:<5} | {:<10} | {:<8}",
        "Task", "Last Done", "Days", "Count", "Frequency", "Status"
    );
    println!("{}", "-".repeat(90));

    for row in rows {
        let frequency = row.cadence.map(|c| c.label()).unwrap_or("unknown");
        let status = match row.cadence {
            Some(_) if row.due => "Due",
            Some(_) => "Not Due",
            None => "-",
        };
        println!(
            "{:<40} | {} | {:<5} | {:<5} | {:<10} | {:<8}",
            truncate(&row.task, 38),
            row.last_done.format("%Y-%m-%d"),
            row.days_since,
            row.completion_count,
            frequency,
            status
        );
    }

    println!("\n{RULE}");
}

pub fn print_stats(history: &TaskHistory, today: NaiveDate) {
    println!("\n{RULE}");
    println!("       CLEANING STATISTICS");
    println!("{RULE}\n");

    if history.is_empty() {
        println!("No task history found. Start completing tasks to build statistics!");
        return;
    }

    let overview = overview(history, today);
    println!("Total tasks completed: {}", overview.total_completions);
    if let Some((task, count)) = &overview.most_completed {
        println!("Most completed task: {task} ({count} times)");
    }
    println!("Current streak: {} days", overview.current_streak);
    println!("Total unique tasks completed: {}", overview.unique_tasks);

    println!("\nCompletion by Frequency:");
    println!("------------------------");
    println!(
        "{:<10} | {:<5} | {:<9} | {:<7} | {:<12}",
        "Frequency", "Total", "Completed", "Overdue", "Completion %"
    );
    println!("{}", "-".repeat(55));
    for (cadence, stats) in &overview.by_cadence {
        if stats.total == 0 {
            continue;
        }
        let pct = stats.completed as f64 / stats.total as f64 * 100.0;
        println!(
            "{:<10} | {:<5} | {:<9} | {:<7} | {pct:.1}%",
            capitalize(cadence.label()),
            stats.total,
            stats.completed,
            stats.due
        );
    }

    println!("\n{RULE}");
}

pub fn print_overdue(history: &TaskHistory, today: NaiveDate) {
    println!("\n{RULE}");
    println!("       OVERDUE TASKS");
    println!("{RULE}\n");

    let due = overdue_tasks(history, today);
    if due.is_empty() {
        println!("Nothing is due right now.");
        return;
    }

    for (i, (task, score)) in due.iter().enumerate() {
        let band = UrgencyBand::from_score(*score);
        let cadence = catalog::find(task)
            .map(|def| def.cadence.label())
            .unwrap_or("unknown");
        println!("  {}. {task} ({cadence})", i + 1);
        println!("     Urgency: {} (score {score:.1})", band.label());
    }

    println!("\n{RULE}");
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        name.chars().take(max).collect()
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
