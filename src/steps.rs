//! Collatz step counting: the number of "halve if even, else triple-and-add-one"
//! transitions needed to bring a starting integer down to 1.
//!
//! Two implementations of the same function live here. [`basic`] is the
//! straightforward one-transition-per-iteration loop; [`ctz`] retires whole
//! runs of even steps at once and is what the binary uses. They must agree on
//! every input, which the tests check against each other.

/// Number of Collatz transitions from `n` down to 1.
///
/// `basic(1) == 0`. Only defined for `n >= 1`; `n == 0` never reaches the
/// terminal value and is a caller contract violation.
///
/// Intermediate values can exceed `n` itself (the odd branch computes
/// `3n + 1`), so the working variable is `u64` regardless of how small the
/// input is. Trajectories are known to stay within `u64` for every start up
/// to well past 10^7; debug builds trap on overflow beyond that.
#[inline]
pub fn basic(mut n: u64) -> u64 {
    debug_assert!(n >= 1, "Collatz steps are only defined for n >= 1");
    let mut steps = 0;
    while n != 1 {
        if n & 1 == 0 {
            n >>= 1;
        } else {
            n = 3 * n + 1;
        }
        steps += 1;
    }
    steps
}

/// Same function as [`basic`], but consumes every run of even steps in one
/// shift using the trailing-zero count of `n`.
#[inline]
pub fn ctz(mut n: u64) -> u64 {
    debug_assert!(n >= 1, "Collatz steps are only defined for n >= 1");
    let mut steps = 0;
    while n != 1 {
        if n & 1 == 0 {
            let run = n.trailing_zeros();
            n >>= run;
            steps += u64::from(run);
        } else {
            n = 3 * n + 1;
            steps += 1;
        }
    }
    steps
}
