//! Rail shortest-path planner CLI.
//!
//! Reads an edge-list file describing the rail network, then either
//! prints the per-station adjacency (and writes a DOT export) or reports
//! shortest distances from an origin station.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rail_routes::domain::{InvalidStation, Station};
use rail_routes::input::ParseError;
use rail_routes::planner::shortest_paths;
use rail_routes::{export, input, report};

/// Shortest-path reporting over a rail network.
#[derive(Debug, Parser)]
#[command(name = "rail-routes", version, about)]
struct Cli {
    /// Origin station for the distance report. Without it, the network's
    /// adjacency is listed and the DOT export is written instead.
    origin: Option<String>,

    /// Edge-list file describing the network.
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Where to write the DOT export (no-origin mode only).
    #[arg(long, default_value = "graph.gv")]
    dot: PathBuf,
}

/// Top-level failures, reported on stderr.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Input { path: PathBuf, source: ParseError },

    #[error("invalid origin: {0}")]
    Origin(#[from] InvalidStation),

    #[error("failed to write {}: {source}", .path.display())]
    DotExport {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let network = input::load_network(&cli.input).map_err(|source| CliError::Input {
        path: cli.input.clone(),
        source,
    })?;

    match &cli.origin {
        Some(origin) => {
            let origin = Station::parse(origin)?;
            let table = shortest_paths(&network, &origin);
            print!("{}", report::distance_report(&table));
        }
        None => {
            export::write_dot(&network, &cli.dot).map_err(|source| CliError::DotExport {
                path: cli.dot.clone(),
                source,
            })?;
            print!("{}", report::edge_list(&network));
        }
    }

    Ok(())
}
