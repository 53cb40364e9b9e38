//! Alternate driver: the same partitions dispatched on a rayon pool sized
//! to the worker count.

use std::num::{NonZeroU64, NonZeroUsize};
use std::ops::RangeInclusive;

use tracing::debug;

use crate::{range, Result};

/// Sums `worker(partition)` over the partitions of `1..=limit` on a rayon
/// pool of exactly `min(workers, limit)` threads.
///
/// Pool construction failure maps into [`crate::Error::ThreadPool`]. Unlike
/// the scoped driver, a worker panic propagates out of the pool as a panic
/// rather than an error value.
pub fn sum(
    limit: NonZeroU64,
    workers: NonZeroUsize,
    worker: impl Fn(RangeInclusive<u64>) -> u64 + Sync,
) -> Result<u64> {
    let workers = range::clamp_workers(limit, workers);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .build()?;

    let partitions = range::partition(limit, workers);
    debug!(
        workers = workers.get(),
        partitions = partitions.len(),
        "dispatching on rayon pool"
    );
    let total = pool.install(|| {
        use rayon::prelude::*;
        partitions.into_par_iter().map(&worker).sum()
    });
    Ok(total)
}
