//! Per-range step-count summation.
//!
//! [`range_sum`] is the routine each worker runs over its own partition: a
//! private `u64` accumulator, no side effects, no shared state. The `u64`
//! total is safe while `limit * max-steps` stays under 2^64, which holds far
//! beyond the 10^7 default bound (individual step counts there are in the
//! low hundreds).

use std::num::NonZeroU64;
use std::ops::RangeInclusive;

/// Sum of `steps(n)` for every `n` in the closed range.
pub fn range_sum(range: RangeInclusive<u64>, steps: impl Fn(u64) -> u64) -> u64 {
    range.map(steps).sum()
}

/// Single-threaded sum over the whole of `1..=limit`.
///
/// This is the reference every partitioned driver must agree with.
pub fn sequential(limit: NonZeroU64, steps: impl Fn(u64) -> u64) -> u64 {
    range_sum(1..=limit.get(), steps)
}
