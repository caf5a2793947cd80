//! Textual views of the network and of shortest-path results.
//!
//! All rounding happens here, at presentation time: distances accumulate
//! at full `f64` precision and are formatted to two decimals only when a
//! line is rendered.

use crate::domain::Station;
use crate::network::{Link, RailNetwork};
use crate::planner::DistanceTable;

/// One line per directed adjacency: `source, target, weight`.
///
/// Both directions of every connection appear, so each station's full
/// adjacency can be read off the listing. Lines are sorted by source,
/// then target.
pub fn edge_list(network: &RailNetwork) -> String {
    let mut rows: Vec<(&Station, &Link)> = network.connections().collect();
    rows.sort_by(|a, b| (a.0, &a.1.to).cmp(&(b.0, &b.1.to)));

    let mut out = String::new();
    for (from, link) in rows {
        out.push_str(&format!("{from}, {}, {:.2}\n", link.to, link.weight));
    }
    out
}

/// Render the distance report for one origin.
///
/// A header line naming the origin, then one line per reachable
/// destination: the destination, the reconstructed route, and the
/// cumulative distance rounded to two decimals. Destinations are ordered
/// nearest-first, ties by name; unreachable stations produce no line.
pub fn distance_report(table: &DistanceTable) -> String {
    let mut destinations: Vec<(&Station, f64)> = table.iter().collect();
    destinations.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let mut out = format!("Distances from {}\n", table.origin());
    for (destination, distance) in destinations {
        if let Some(path) = table.path_to(destination) {
            let route: Vec<&str> = path.iter().map(Station::as_str).collect();
            out.push_str(&format!(
                "{destination}, {}, {distance:.2}\n",
                route.join(" -> ")
            ));
        }
    }
    out
}
