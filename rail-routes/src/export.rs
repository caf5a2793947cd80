//! DOT graph-description export.
//!
//! Renders the network in Graphviz DOT syntax for visualization. Writing
//! the text to a particular file is a thin adapter over the rendering.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::Station;
use crate::network::{Link, RailNetwork};

/// Render the network as Graphviz DOT text.
///
/// Every station is declared as a node, and each undirected connection
/// appears once as an `--` edge with its weight as the label (parallel
/// connections each get their own edge). Stations and edges are listed in
/// name order so the rendering is deterministic.
pub fn dot_format(network: &RailNetwork) -> String {
    let mut out = String::from("graph rail {\n");

    let mut stations: Vec<&Station> = network.stations().collect();
    stations.sort();
    for station in &stations {
        out.push_str(&format!("    \"{station}\";\n"));
    }

    // Each undirected connection is stored in both directions; keeping
    // only the lexicographically-forward direction lists it exactly once.
    let mut edges: Vec<(&Station, &Link)> = network
        .connections()
        .filter(|(from, link)| *from < &link.to)
        .collect();
    edges.sort_by(|a, b| (a.0, &a.1.to).cmp(&(b.0, &b.1.to)));

    for (from, link) in edges {
        out.push_str(&format!(
            "    \"{from}\" -- \"{}\" [label=\"{:.2}\"];\n",
            link.to, link.weight
        ));
    }

    out.push_str("}\n");
    out
}

/// Write the DOT rendering of the network to a file.
pub fn write_dot<P: AsRef<Path>>(network: &RailNetwork, path: P) -> io::Result<()> {
    fs::write(path, dot_format(network))
}
