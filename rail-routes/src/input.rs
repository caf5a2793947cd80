//! Edge-list input parsing.
//!
//! The network is described by a line-oriented text format, one connection
//! per line as `stationA,stationB,weight`. Fields are trimmed and blank
//! lines skipped. Malformed records are surfaced here with their line
//! number; the planner never sees them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::domain::{DomainError, InvalidStation, Station};
use crate::network::RailNetwork;

/// Error from reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Record does not have exactly three fields
    #[error("line {line}: expected `station,station,weight`, found {found} field(s)")]
    WrongFieldCount { line: usize, found: usize },

    /// A station name failed validation
    #[error("line {line}: {source}")]
    BadStation { line: usize, source: InvalidStation },

    /// The weight field is not a number
    #[error("line {line}: invalid weight `{value}`")]
    BadWeight { line: usize, value: String },

    /// The record violated a network invariant (negative weight, self-loop)
    #[error("line {line}: {source}")]
    BadConnection { line: usize, source: DomainError },

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Read a network from a line-oriented edge list.
pub fn read_network<R: BufRead>(reader: R) -> Result<RailNetwork, ParseError> {
    let mut network = RailNetwork::new();
    let mut records = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (a, b, weight) = parse_record(&line, line_number)?;
        network
            .add_connection(a, b, weight)
            .map_err(|source| ParseError::BadConnection {
                line: line_number,
                source,
            })?;
        records += 1;
    }

    debug!(
        records,
        stations = network.station_count(),
        "edge list read"
    );
    Ok(network)
}

/// Load a network from an edge-list file on disk.
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<RailNetwork, ParseError> {
    let file = File::open(path)?;
    read_network(BufReader::new(file))
}

/// Parse one `stationA,stationB,weight` record.
fn parse_record(line: &str, line_number: usize) -> Result<(Station, Station, f64), ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[a, b, weight] = fields.as_slice() else {
        return Err(ParseError::WrongFieldCount {
            line: line_number,
            found: fields.len(),
        });
    };

    let a = Station::parse(a).map_err(|source| ParseError::BadStation {
        line: line_number,
        source,
    })?;
    let b = Station::parse(b).map_err(|source| ParseError::BadStation {
        line: line_number,
        source,
    })?;
    let weight = weight.parse::<f64>().map_err(|_| ParseError::BadWeight {
        line: line_number,
        value: weight.to_string(),
    })?;

    Ok((a, b, weight))
}
