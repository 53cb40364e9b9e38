//! Partitioned parallel drivers: fan out one unit of work per sub-range of
//! `1..=limit`, join, then reduce the partial sums sequentially.

pub mod rayon;
pub mod scoped;
