use chrono::NaiveDate;
use spruce_core::{
    BundleStore, DayContext, Energy, FixedClock, GeneratorPolicy, HistoryStore, Scheduler,
    StoreError, TaskHistory, generate_bundle,
};
use spruce_store::FileStore;
use tempfile::TempDir;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 6).unwrap()
}

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path())
}

/// Completions accumulate in history.json and read back intact.
#[test]
fn test_history_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store
        .record_completion("ada", "Scoop cat litter", monday(), Some("fresh litter"))
        .unwrap();
    store
        .record_completion("ada", "Scoop cat litter", monday().succ_opt().unwrap(), None)
        .unwrap();
    store
        .record_completion("ada", "Unload dishwasher", monday(), None)
        .unwrap();

    let history = store.history("ada").unwrap();
    assert_eq!(history.len(), 2);

    let litter = &history["Scoop cat litter"];
    assert_eq!(litter.completion_count, 2);
    assert_eq!(litter.last_done, "2026-04-07");
    assert_eq!(litter.completion_log.len(), 2);
    assert_eq!(litter.completion_log[0].note.as_deref(), Some("fresh litter"));
    assert_eq!(litter.completion_log[1].note, None);

    assert!(dir.path().join("ada").join("history.json").exists());
}

/// A user with no file yet reads as empty history, not an error.
#[test]
fn test_missing_history_reads_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.history("nobody").unwrap(), TaskHistory::new());
}

/// Unreadable JSON is surfaced as Corrupt rather than wiped.
#[test]
fn test_corrupt_history_is_an_error() {
    let dir = TempDir::new().unwrap();
    let user_dir = dir.path().join("ada");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("history.json"), "{not json").unwrap();

    let store = store_in(&dir);
    let err = store.history("ada").unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)), "got {err:?}");
}

/// Bundles land under bundles/<date>.json and survive a round trip.
#[test]
fn test_bundle_round_trip_and_delete() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    assert_eq!(store.get("ada", monday()).unwrap(), None);

    let ctx = DayContext::for_date(monday());
    let bundle = generate_bundle(&ctx, &TaskHistory::new(), &GeneratorPolicy::default());
    store.put("ada", &bundle).unwrap();

    let path = dir
        .path()
        .join("ada")
        .join("bundles")
        .join("2026-04-06.json");
    assert!(path.exists());
    assert_eq!(store.get("ada", monday()).unwrap(), Some(bundle));

    store.delete("ada", monday()).unwrap();
    assert_eq!(store.get("ada", monday()).unwrap(), None);

    // Deleting what is already gone stays quiet.
    store.delete("ada", monday()).unwrap();
}

/// Users do not see each other's data.
#[test]
fn test_users_are_isolated() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store
        .record_completion("ada", "Scoop cat litter", monday(), None)
        .unwrap();

    assert_eq!(store.history("grace").unwrap(), TaskHistory::new());
    assert_eq!(store.history("ada").unwrap().len(), 1);
}

/// The full facade over real files: one generation per day, reset
/// regenerates, completions persist.
#[test]
fn test_scheduler_over_file_store() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = Scheduler::new(
        "ada",
        FixedClock(monday()),
        store_in(&dir),
        store_in(&dir),
    );

    let first = scheduler.get_or_create_today().unwrap();
    let second = scheduler.get_or_create_today().unwrap();
    assert_eq!(first, second);

    scheduler.mark_completed("Scoop cat litter", None).unwrap();
    let recs = scheduler.recommendations(Energy::Green).unwrap();
    assert_eq!(recs.week_number, 15);
    assert_eq!(recs.week_focus, "Living Area");

    // The snapshot keeps serving the pre-completion lists until reset.
    assert!(recs.daily_tasks.contains(&"Scoop cat litter".to_string()));
    let fresh = scheduler.reset_today().unwrap();
    assert!(!fresh.daily.green.contains(&"Scoop cat litter".to_string()));

    // History survived the reset on disk.
    let history = scheduler.history_snapshot().unwrap();
    assert_eq!(history["Scoop cat litter"].completion_count, 1);
}
