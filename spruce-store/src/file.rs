//! File-backed store.
//!
//! Layout under the store root:
//!   <root>/<user>/history.json
//!   <root>/<user>/bundles/<YYYY-MM-DD>.json
//!
//! Reads of missing files come back empty/absent; directories appear on
//! first write. A file that exists but does not decode is `Corrupt`, not
//! silently replaced.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use spruce_core::{
    BundleStore, DATE_FORMAT, DailyBundle, HistoryStore, Result, StoreError, TaskHistory,
};

/// JSON-file implementation of both store traits.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn user_dir(&self, user: &str) -> PathBuf {
        self.root.join(user)
    }

    fn history_path(&self, user: &str) -> PathBuf {
        self.user_dir(user).join("history.json")
    }

    fn bundles_dir(&self, user: &str) -> PathBuf {
        self.user_dir(user).join("bundles")
    }

    fn bundle_path(&self, user: &str, date: NaiveDate) -> PathBuf {
        self.bundles_dir(user)
            .join(format!("{}.json", date.format(DATE_FORMAT)))
    }

    fn read_history(&self, user: &str) -> Result<TaskHistory> {
        let path = self.history_path(user);
        match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(TaskHistory::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write_history(&self, user: &str, history: &TaskHistory) -> Result<()> {
        fs::create_dir_all(self.user_dir(user))?;
        let raw = serde_json::to_string_pretty(history)
            .map_err(|e| StoreError::Corrupt(format!("encode history: {e}")))?;
        fs::write(self.history_path(user), raw)?;
        Ok(())
    }
}

impl HistoryStore for FileStore {
    fn history(&self, user: &str) -> Result<TaskHistory> {
        self.read_history(user)
    }

    fn record_completion(
        &mut self,
        user: &str,
        task: &str,
        on: NaiveDate,
        note: Option<&str>,
    ) -> Result<()> {
        let mut history = self.read_history(user)?;
        history
            .entry(task.to_string())
            .or_default()
            .record(on, note.map(str::to_string));
        self.write_history(user, &history)?;
        debug!(user, task, date = %on, "recorded completion");
        Ok(())
    }
}

impl BundleStore for FileStore {
    fn get(&self, user: &str, date: NaiveDate) -> Result<Option<DailyBundle>> {
        let path = self.bundle_path(user, date);
        match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn put(&mut self, user: &str, bundle: &DailyBundle) -> Result<()> {
        fs::create_dir_all(self.bundles_dir(user))?;
        let raw = serde_json::to_string_pretty(bundle)
            .map_err(|e| StoreError::Corrupt(format!("encode bundle: {e}")))?;
        fs::write(self.bundle_path(user, bundle.date), raw)?;
        debug!(user, date = %bundle.date, "stored daily bundle");
        Ok(())
    }

    fn delete(&mut self, user: &str, date: NaiveDate) -> Result<()> {
        match fs::remove_file(self.bundle_path(user, date)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
