//! Error types for store collaborators.

/// Failure surfaced by a history or bundle store.
///
/// Data-quality problems (malformed dates, unknown task names) never appear
/// here; the engine degrades those in place. Only collaborator failures
/// cross the core boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored payload could not be encoded or decoded.
    #[error("corrupt store data: {0}")]
    Corrupt(String),

    /// The backing store cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Convenience result type for store-facing operations.
pub type Result<T> = std::result::Result<T, StoreError>;
