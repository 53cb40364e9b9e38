//! Runtime knobs: the range bound and the worker count.
//!
//! Both are flags with environment-variable fallbacks, since those two knobs
//! are the only externally meaningful interface the program offers. Zero is
//! rejected at parse time by the `NonZero` field types.

use std::num::{NonZeroU64, NonZeroUsize};

use clap::Parser;

/// Average Collatz step count over `1..=LIMIT`, computed on a worker pool
#[derive(Debug, Parser)]
#[command(name = "collatz", version)]
pub struct Config {
    /// Upper bound of the computed range `1..=LIMIT`
    #[arg(
        long,
        env = "COLLATZ_LIMIT",
        value_name = "LIMIT",
        default_value_t = Config::DEFAULT_LIMIT
    )]
    pub limit: NonZeroU64,

    /// Worker thread count (defaults to the host's available parallelism)
    #[arg(long, env = "COLLATZ_THREADS", value_name = "THREADS")]
    pub threads: Option<NonZeroUsize>,
}

impl Config {
    pub const DEFAULT_LIMIT: NonZeroU64 = match NonZeroU64::new(10_000_000) {
        Some(limit) => limit,
        None => unreachable!(),
    };

    const FALLBACK_WORKERS: NonZeroUsize = match NonZeroUsize::new(2) {
        Some(workers) => workers,
        None => unreachable!(),
    };

    /// Requested worker count, falling back to the host's processing-unit
    /// count when `--threads` is absent.
    pub fn workers(&self) -> NonZeroUsize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism().unwrap_or(Self::FALLBACK_WORKERS)
        })
    }
}
