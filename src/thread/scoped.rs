//! Fan-out/fan-in driver over `std::thread::scope`: one thread per
//! partition, join all, sum the partial results sequentially.

use std::num::{NonZeroU64, NonZeroUsize};
use std::ops::RangeInclusive;

use tracing::debug;

use crate::{range, Error, Result};

/// Sums `worker(partition)` over the partitions of `1..=limit` using one
/// scoped thread per partition.
///
/// Each thread owns its range outright and returns a private partial sum;
/// nothing mutable is shared, so no synchronization is involved beyond the
/// joins. Every thread is joined before the result is examined, so a panic
/// in one worker never abandons the others mid-flight; the first panic is
/// then reported as [`Error::WorkerPanicked`] and the run yields no total.
pub fn sum(
    limit: NonZeroU64,
    workers: NonZeroUsize,
    worker: impl Fn(RangeInclusive<u64>) -> u64 + Sync,
) -> Result<u64> {
    let partitions = range::partition(limit, workers);
    let worker = &worker;

    let partials = std::thread::scope(|s| {
        let mut handles = Vec::with_capacity(partitions.len());
        for part in partitions {
            debug!(start = *part.start(), end = *part.end(), "dispatching worker");
            handles.push(s.spawn(move || worker(part)));
        }
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(Error::worker_panicked))
            .collect::<Vec<_>>()
    });

    let mut total = 0u64;
    for partial in partials {
        total += partial?;
    }
    debug!(total, "all workers joined");
    Ok(total)
}
