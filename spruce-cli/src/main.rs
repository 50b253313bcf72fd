use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use spruce_core::{Energy, GeneratorPolicy, Scheduler, SystemClock};
use spruce_store::FileStore;

mod config;
mod home;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "spruce",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPRUCE_BUILD_SHA"), ")"),
    about = "Adaptive cleaning scheduler"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default config to ~/.spruce/config.toml
    Init,

    /// Show today's recommendations
    Today {
        /// Energy level: red, yellow, or green (default from config)
        #[arg(long)]
        energy: Option<String>,
    },

    /// Record a task completion
    Done {
        /// Task name exactly as displayed
        task: String,

        /// Optional note stored with the completion
        #[arg(long)]
        note: Option<String>,
    },

    /// Discard today's assignments and regenerate from history
    Reset,

    /// Completion history, most recent first
    History,

    /// Totals, streak, and per-frequency breakdown
    Stats,

    /// Every task currently due, most urgent first
    Overdue,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init => {
            config::init_config()?;
        }

        Command::Today { energy } => {
            let cfg = config::load_config()?;
            let label = energy.as_deref().unwrap_or(&cfg.schedule.default_energy);
            let energy = parse_energy(label)?;
            let mut scheduler = open_scheduler(&cfg)?;
            let recs = scheduler
                .recommendations(energy)
                .context("load today's recommendations")?;
            let history = scheduler
                .history_snapshot()
                .context("read completion history")?;
            render::print_recommendations(&recs, &history, scheduler.today());
        }

        Command::Done { task, note } => {
            let cfg = config::load_config()?;
            let mut scheduler = open_scheduler(&cfg)?;
            scheduler
                .mark_completed(&task, note.as_deref())
                .with_context(|| format!("record completion of '{task}'"))?;
            println!("✅ Task marked as completed: {task}");
        }

        Command::Reset => {
            let cfg = config::load_config()?;
            let mut scheduler = open_scheduler(&cfg)?;
            scheduler.reset_today().context("reset today's bundle")?;
            println!("\n✅ Today's task assignments have been reset!");
        }

        Command::History => {
            let cfg = config::load_config()?;
            let scheduler = open_scheduler(&cfg)?;
            let history = scheduler
                .history_snapshot()
                .context("read completion history")?;
            render::print_history(&history, scheduler.today());
        }

        Command::Stats => {
            let cfg = config::load_config()?;
            let scheduler = open_scheduler(&cfg)?;
            let history = scheduler
                .history_snapshot()
                .context("read completion history")?;
            render::print_stats(&history, scheduler.today());
        }

        Command::Overdue => {
            let cfg = config::load_config()?;
            let scheduler = open_scheduler(&cfg)?;
            let history = scheduler
                .history_snapshot()
                .context("read completion history")?;
            render::print_overdue(&history, scheduler.today());
        }
    }

    Ok(())
}

fn open_scheduler(cfg: &config::Config) -> Result<Scheduler<SystemClock, FileStore, FileStore>> {
    let tz: Tz = cfg
        .timezone
        .parse()
        .map_err(|_| anyhow!("unknown timezone in config: {}", cfg.timezone))?;
    let data = home::data_dir()?;
    let policy = GeneratorPolicy {
        always_show_essential: cfg.schedule.always_show_essential,
    };
    Ok(Scheduler::new(
        cfg.user.clone(),
        SystemClock::new(tz),
        FileStore::new(&data),
        FileStore::new(&data),
    )
    .with_policy(policy))
}

fn parse_energy(label: &str) -> Result<Energy> {
    Energy::from_label(label)
        .ok_or_else(|| anyhow!("unknown energy level '{label}' (expected red, yellow, or green)"))
}
