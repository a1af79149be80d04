// ABOUTME: Demo entry point for the stride workout summary engine
// ABOUTME: Decodes a fixed batch of sensor packets and prints one summary per packet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Stride demo binary.
//!
//! Iterates a fixed batch of recorded sensor packets, builds the matching
//! calculator for each, and writes one rendered summary per packet to
//! stdout.
//!
//! Usage:
//! ```bash
//! # Text summaries (default)
//! cargo run --bin stride
//!
//! # JSON summaries
//! cargo run --bin stride -- --format json
//!
//! # Verbose logging
//! cargo run --bin stride -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use stride::formatters::{format_summary, OutputFormat};
use stride::intelligence::{read_packet, Workout};
use stride::logging::{self, LoggingConfig};

/// Recorded sensor packets: workout code plus positional readings
const PACKETS: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(
    name = "stride",
    about = "Stride workout summary demo",
    long_about = "Compute distance, mean speed, and calories for a recorded batch of workouts"
)]
struct Args {
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    logging::init(&LoggingConfig {
        level: level.into(),
        ..LoggingConfig::default()
    })?;

    let format = OutputFormat::from_str_param(&args.format);

    for &(code, readings) in PACKETS {
        let workout = read_packet(code, readings)?;
        let summary = workout.summary();
        debug!(code, calories = summary.calories_kcal, "computed summary");
        println!("{}", format_summary(&summary, format)?);
    }

    Ok(())
}
