//! # gnsplit CLI
//!
//! Command-line interface for divisive Girvan-Newman community detection.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gnsplit::{Config, GraphError};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Split a graph's edge list into communities by iterative edge-betweenness removal.
#[derive(Parser)]
#[command(name = "gnsplit")]
#[command(about = "Girvan-Newman divisive community detection", long_about = None)]
#[command(version)]
struct Cli {
    /// Input edge-list file: one `u v` pair per line, `#` comments allowed.
    input: PathBuf,

    /// Target number of communities.
    k: usize,

    /// Output path: one `original_label community_id` line per node.
    output: PathBuf,

    /// Fraction of highest-degree vertices used as BFS sources, in (0, 1].
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Increase log verbosity (repeat for more detail, e.g. -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "gnsplit=info",
        1 => "gnsplit=debug",
        _ => "gnsplit=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config {
        input: &cli.input,
        output: &cli.output,
        k: cli.k,
        rate: cli.rate,
    };

    match gnsplit::run(&config) {
        Ok(report) => {
            info!(
                iterations = report.iterations,
                edges_cut = report.edges_cut,
                communities = report.communities,
                "community detection complete"
            );
            ExitCode::SUCCESS
        }
        Err(GraphError::Unsatisfiable(msg)) => {
            warn!("{msg}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
