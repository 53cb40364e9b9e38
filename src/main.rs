//! Binary driver: parse configuration, time the partitioned parallel sum,
//! print the summary.

use std::time::Instant;

use clap::Parser;

use collatz::{config::Config, range, report::Summary, steps, sum, thread};

fn main() {
    // Structured logging with env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> collatz::Result<()> {
    let config = Config::parse();
    let workers = range::clamp_workers(config.limit, config.workers());

    println!("Computing Collatz step counts for 1..={}", config.limit);
    let start = Instant::now();
    let total_steps = thread::scoped::sum(config.limit, workers, |part| {
        sum::range_sum(part, steps::ctz)
    })?;
    let elapsed = start.elapsed();

    println!(
        "{}",
        Summary {
            limit: config.limit,
            workers,
            total_steps,
            elapsed,
        }
    );
    Ok(())
}
