//! Partitioning of `1..=limit` into one contiguous sub-range per worker.
//!
//! Boundaries are fixed before any worker starts and each range is moved into
//! exactly one worker, so the workers never share mutable state. The union of
//! the partitions is exactly `1..=limit`, with no overlap and no gap: the
//! last partition absorbs the `limit % workers` remainder of the truncating
//! batch-size division.

use std::num::{NonZeroU64, NonZeroUsize};
use std::ops::RangeInclusive;

/// Worker count actually usable for `limit` elements.
///
/// More workers than elements would produce empty or inverted ranges under
/// the truncating batch-size scheme, so the count is clamped to `limit`.
/// Drivers report this clamped value, not the requested one.
pub fn clamp_workers(limit: NonZeroU64, workers: NonZeroUsize) -> NonZeroUsize {
    let cap = usize::try_from(limit.get())
        .ok()
        .and_then(NonZeroUsize::new)
        .unwrap_or(NonZeroUsize::MAX);
    workers.min(cap)
}

/// Splits `1..=limit` into `min(workers, limit)` inclusive sub-ranges.
///
/// Worker `i` gets `i*batch + 1 ..= (i+1)*batch` where `batch` is the
/// truncated per-worker share; the final worker's upper bound is `limit`
/// instead. Deterministic for fixed inputs.
pub fn partition(limit: NonZeroU64, workers: NonZeroUsize) -> Vec<RangeInclusive<u64>> {
    let workers = clamp_workers(limit, workers).get() as u64;
    let limit = limit.get();
    let batch = limit / workers;
    (0..workers)
        .map(|i| {
            let start = i * batch + 1;
            let end = if i == workers - 1 {
                limit
            } else {
                start + batch - 1
            };
            start..=end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nz64(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    fn nzusize(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn remainder_goes_to_last_partition() {
        let parts = partition(nz64(10), nzusize(3));
        assert_eq!(parts, [1..=3, 4..=6, 7..=10]);
    }

    #[test]
    fn single_worker_takes_everything() {
        assert_eq!(partition(nz64(5), nzusize(1)), [1..=5]);
    }

    #[test]
    fn more_workers_than_elements_is_clamped() {
        assert_eq!(clamp_workers(nz64(3), nzusize(8)), nzusize(3));
        assert_eq!(partition(nz64(3), nzusize(8)), [1..=1, 2..=2, 3..=3]);
    }

    proptest! {
        #[test]
        fn covers_exactly_one_to_limit(limit in 1u64..=10_000, workers in 1usize..=64) {
            let limit = nz64(limit);
            let workers = nzusize(workers);
            let parts = partition(limit, workers);

            prop_assert_eq!(parts.len(), clamp_workers(limit, workers).get());
            prop_assert_eq!(*parts[0].start(), 1);
            prop_assert_eq!(*parts[parts.len() - 1].end(), limit.get());
            for part in &parts {
                prop_assert!(part.start() <= part.end());
            }
            for pair in parts.windows(2) {
                prop_assert_eq!(*pair[1].start(), pair[0].end() + 1);
            }
        }

        #[test]
        fn boundaries_are_deterministic(limit in 1u64..=10_000, workers in 1usize..=64) {
            let limit = nz64(limit);
            let workers = nzusize(workers);
            prop_assert_eq!(partition(limit, workers), partition(limit, workers));
        }
    }
}
