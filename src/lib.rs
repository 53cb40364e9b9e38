//! Parallel average Collatz step count.
//!
//! For every integer in `1..=limit`, counts the Collatz transitions down to 1,
//! splits the range into one contiguous partition per worker, sums the
//! per-partition totals after a single join point, and derives the average.
//! Workers own disjoint ranges and private accumulators, so the whole
//! computation runs without locks or atomics.

pub mod config;
pub mod error;
pub mod range;
pub mod report;
pub mod steps;
pub mod sum;
pub mod thread;

pub use error::{Error, Result};
