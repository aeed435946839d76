//! Consolidates postal-code restriction ranges and prints one range per line.
//!
//! Run with: `cargo run --example zip_codes -- [94133,94133] [94200,94299]`
//! Without arguments a built-in sample is used. Set `RUST_LOG=debug` to see
//! library diagnostics.

use std::process::ExitCode;

use clap::Parser;
use range_consolidator::{consolidate, Interval};

#[derive(Parser, Debug)]
#[command(version, about = "Merge overlapping and adjacent integer ranges", long_about = None)]
struct Cli {
    /// Ranges in `[low,high]` form. Defaults to a postal-code sample
    ranges: Vec<Interval>,
}

fn sample() -> Vec<Interval> {
    vec![
        Interval::new(94133, 94133),
        Interval::new(94200, 94299),
        Interval::new(94226, 94399),
    ]
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let ranges = if args.ranges.is_empty() {
        sample()
    } else {
        args.ranges
    };

    match consolidate(&ranges) {
        Ok(merged) => {
            for range in merged {
                println!("{}", range);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
