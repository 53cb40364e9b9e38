//! End-of-run summary and its plain-text rendering.

use std::fmt;
use std::num::{NonZeroU64, NonZeroUsize};
use std::time::Duration;

/// Everything the program reports after the computation: the worker count
/// actually used, the measured wall-clock time, and the total from which the
/// average is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub limit: NonZeroU64,
    pub workers: NonZeroUsize,
    pub total_steps: u64,
    pub elapsed: Duration,
}

impl Summary {
    /// Average step count across all `limit` integers.
    pub fn average(&self) -> f64 {
        self.total_steps as f64 / self.limit.get() as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Worker threads: {}", self.workers)?;
        writeln!(f, "Elapsed: {:.4} s", self.elapsed.as_secs_f64())?;
        write!(
            f,
            "Average steps to 1 across {} integers: {:.2}",
            self.limit,
            self.average()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(limit: u64, total_steps: u64) -> Summary {
        Summary {
            limit: NonZeroU64::new(limit).unwrap(),
            workers: NonZeroUsize::new(4).unwrap(),
            total_steps,
            elapsed: Duration::from_millis(1_234),
        }
    }

    #[test]
    fn average_for_reference_scenarios() {
        assert_eq!(summary(1, 0).average(), 0.0);
        assert_eq!(summary(2, 1).average(), 0.5);
        assert!((summary(7, 39).average() - 5.571).abs() < 0.001);
    }

    #[test]
    fn rendering_precision() {
        let text = summary(7, 39).to_string();
        assert_eq!(
            text,
            "Worker threads: 4\n\
             Elapsed: 1.2340 s\n\
             Average steps to 1 across 7 integers: 5.57"
        );
    }

    #[test]
    fn zero_average_renders_with_two_decimals() {
        assert!(summary(1, 0).to_string().ends_with("1 integers: 0.00"));
    }
}
