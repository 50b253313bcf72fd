//! spruce-store: JSON-file store for the Spruce scheduler
//!
//! Implements the core's `HistoryStore` and `BundleStore` traits on plain
//! files: one directory per user holding `history.json` and a `bundles/`
//! directory with one `YYYY-MM-DD.json` snapshot per day.

pub mod file;

pub use file::FileStore;
