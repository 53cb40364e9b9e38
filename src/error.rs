//! Crate-wide error taxonomy.
//!
//! The computation is all-or-nothing: a single worker failure aborts the
//! whole run with no partial-result tolerance and no retry.

use thiserror::Error;

/// Errors a partitioned sum can fail with
#[derive(Error, Debug)]
pub enum Error {
    /// A worker thread panicked; the payload text is preserved when it is a
    /// string, which is what `panic!` produces.
    #[error("worker thread panicked: {0}")]
    WorkerPanicked(String),

    /// The sized rayon pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Type alias for Results using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Recovers a readable message from the payload a joined thread
    /// panicked with.
    pub(crate) fn worker_panicked(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Self::WorkerPanicked(message)
    }
}
