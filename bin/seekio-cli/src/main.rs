//! SeekIO CLI - Disk Scheduling Command Line Interface
//!
//! This binary parses a raw request queue, runs it through the scheduling
//! engine, and renders the result as text or JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use seekio_sched::{DEFAULT_DISK_SIZE, Policy, Replay, RequestSet, ScheduleResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "seekio-cli")]
#[command(about = "SeekIO disk scheduling CLI")]
#[command(version)]
struct Args {
    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one policy against a request queue
    Evaluate {
        /// Comma-separated block positions, e.g. "98,183,37,122"
        #[arg(short, long)]
        requests: String,

        /// Initial head position
        #[arg(long)]
        head: u32,

        /// Disk size (exclusive upper bound on positions)
        #[arg(long, default_value_t = DEFAULT_DISK_SIZE)]
        disk_size: u32,

        /// Policy name (fifo, sstf, scan, cscan, look, clook)
        #[arg(short, long)]
        policy: String,

        /// Print the head path step by step
        #[arg(long)]
        replay: bool,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every policy against the same queue and compare
    Compare {
        /// Comma-separated block positions, e.g. "98,183,37,122"
        #[arg(short, long)]
        requests: String,

        /// Initial head position
        #[arg(long)]
        head: u32,

        /// Disk size (exclusive upper bound on positions)
        #[arg(long, default_value_t = DEFAULT_DISK_SIZE)]
        disk_size: u32,

        /// Emit the results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match args.command {
        Commands::Evaluate {
            requests,
            head,
            disk_size,
            policy,
            replay,
            json,
        } => {
            let policy: Policy = policy.parse()?;
            let queue = RequestSet::parse(&requests, head, Some(disk_size))?;
            let result = policy.evaluate(&queue)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(policy, &result);
                if replay {
                    print_replay(&result, head);
                }
            }
        }
        Commands::Compare {
            requests,
            head,
            disk_size,
            json,
        } => {
            let queue = RequestSet::parse(&requests, head, Some(disk_size))?;
            let mut results = Vec::with_capacity(Policy::ALL.len());
            for policy in Policy::ALL {
                results.push((policy, policy.evaluate(&queue)?));
            }

            if json {
                let mut map = serde_json::Map::new();
                for (policy, result) in &results {
                    map.insert(policy.as_str().to_string(), serde_json::to_value(result)?);
                }
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                print_comparison(&results);
            }
        }
    }

    Ok(())
}

fn print_summary(policy: Policy, result: &ScheduleResult) {
    let title = format!("Results for {}", policy.as_str().to_uppercase());
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("Average movement: {:.2}", result.average);
    println!("Service order: {}", format_positions(&result.order));
    println!("Movements: {}", format_positions(&result.movements));
}

fn print_replay(result: &ScheduleResult, head: u32) {
    println!();
    println!("Head path");
    println!("=========");
    for (i, step) in Replay::new(result, head).enumerate() {
        println!(
            "step {:>3}: {:>5} -> {:<5} (moved {})",
            i + 1,
            step.from,
            step.to,
            step.distance
        );
    }
}

fn print_comparison(results: &[(Policy, ScheduleResult)]) {
    println!("{:<8} {:>14} {:>10}", "POLICY", "TOTAL MOVEMENT", "AVERAGE");
    println!("{}", "-".repeat(34));
    for (policy, result) in results {
        println!(
            "{:<8} {:>14} {:>10.2}",
            policy.as_str().to_uppercase(),
            result.total_movement(),
            result.average
        );
    }
}

/// Format a position list as the comma-delimited form used in summaries.
fn format_positions(values: &[u32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
