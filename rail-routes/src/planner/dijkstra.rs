//! Dijkstra shortest-path search over the rail network.
//!
//! Maintains a frontier of stations prioritized by tentative distance and
//! a settled set whose minimal distance is final. Stale frontier entries
//! are skipped on extraction rather than updated in place, so the heap
//! never needs a decrease-key operation.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::RailNetwork;

/// A settled station: its minimal distance and the station before it.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    distance: f64,
    predecessor: Option<Station>,
}

/// Shortest distances from a fixed origin station.
///
/// Produced by [`shortest_paths`] and owned solely by its caller; it does
/// not borrow or mutate the network. Covers every station reachable from
/// the origin, the origin itself at distance 0. Unreachable stations are
/// simply absent: absence means "no path exists", never zero or infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    origin: Station,
    entries: HashMap<Station, Entry>,
}

impl DistanceTable {
    /// The origin station of this query.
    pub fn origin(&self) -> &Station {
        &self.origin
    }

    /// Minimal cumulative weight from the origin, if `station` is reachable.
    pub fn distance(&self, station: &Station) -> Option<f64> {
        self.entries.get(station).map(|entry| entry.distance)
    }

    /// The previous station on a shortest path to `station`.
    ///
    /// `None` for the origin itself and for unreachable stations.
    pub fn predecessor(&self, station: &Station) -> Option<&Station> {
        self.entries
            .get(station)
            .and_then(|entry| entry.predecessor.as_ref())
    }

    /// True when `station` is reachable from the origin.
    pub fn contains(&self, station: &Station) -> bool {
        self.entries.contains_key(station)
    }

    /// Number of reachable stations, origin included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(station, distance)` for every reachable station.
    ///
    /// Order is unspecified; callers that present the table sort it.
    pub fn iter(&self) -> impl Iterator<Item = (&Station, f64)> {
        self.entries
            .iter()
            .map(|(station, entry)| (station, entry.distance))
    }

    /// Reconstruct the shortest path from the origin to `destination`.
    ///
    /// Follows predecessor links backward from the destination, then
    /// reverses. Returns `None` when `destination` is unreachable; the
    /// path to the origin itself is the origin alone.
    pub fn path_to(&self, destination: &Station) -> Option<Vec<Station>> {
        if !self.entries.contains_key(destination) {
            return None;
        }

        let mut path = vec![destination.clone()];
        let mut current = destination;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();

        Some(path)
    }
}

/// Frontier entry: a station with a tentative distance from the origin.
///
/// Ordered as a min-heap by distance (via `f64::total_cmp`, weights are
/// always finite) so `BinaryHeap::pop` yields the closest unsettled
/// station first.
#[derive(Debug, Clone)]
struct Candidate {
    distance: f64,
    station: Station,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.distance.total_cmp(&other.distance) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute shortest distances from `origin` to every reachable station.
///
/// A pure function of the network's current contents: no state is kept
/// between calls and the network is only read, so repeated queries yield
/// identical tables. An origin the network does not know yields a
/// degenerate table holding just the origin at distance 0.
///
/// Distances accumulate at full `f64` precision; any rounding is left to
/// presentation.
pub fn shortest_paths(network: &RailNetwork, origin: &Station) -> DistanceTable {
    let mut entries: HashMap<Station, Entry> = HashMap::new();
    let mut settled: HashSet<Station> = HashSet::new();
    let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();

    entries.insert(
        origin.clone(),
        Entry {
            distance: 0.0,
            predecessor: None,
        },
    );
    frontier.push(Candidate {
        distance: 0.0,
        station: origin.clone(),
    });

    while let Some(Candidate { distance, station }) = frontier.pop() {
        if !settled.insert(station.clone()) {
            // Stale frontier entry for an already-settled station.
            continue;
        }
        trace!(station = %station, distance, "station settled");

        for link in network.neighbors(&station) {
            let tentative = distance + link.weight;
            let known = entries.get(&link.to).map(|entry| entry.distance);
            if known.is_none_or(|d| tentative < d) {
                entries.insert(
                    link.to.clone(),
                    Entry {
                        distance: tentative,
                        predecessor: Some(station.clone()),
                    },
                );
                frontier.push(Candidate {
                    distance: tentative,
                    station: link.to.clone(),
                });
            }
        }
    }

    debug!(
        origin = %origin,
        reachable = entries.len(),
        "shortest-path search complete"
    );

    DistanceTable {
        origin: origin.clone(),
        entries,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::network::RailNetworkBuilder;
    use proptest::prelude::*;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    /// Minimum total weight over every simple path, by exhaustive
    /// enumeration. The oracle the heap-based search is checked against.
    fn brute_force(network: &RailNetwork, from: &Station, to: &Station) -> Option<f64> {
        fn explore(
            network: &RailNetwork,
            current: &Station,
            to: &Station,
            visited: &mut Vec<Station>,
            travelled: f64,
            best: &mut Option<f64>,
        ) {
            if current == to {
                if best.is_none_or(|b| travelled < b) {
                    *best = Some(travelled);
                }
                return;
            }
            for link in network.neighbors(current) {
                if visited.contains(&link.to) {
                    continue;
                }
                visited.push(link.to.clone());
                explore(network, &link.to, to, visited, travelled + link.weight, best);
                visited.pop();
            }
        }

        let mut best = None;
        let mut visited = vec![from.clone()];
        explore(network, from, to, &mut visited, 0.0, &mut best);
        best
    }

    /// Strategy: a small random network over at most six stations.
    fn arb_network() -> impl Strategy<Value = RailNetwork> {
        proptest::collection::vec((0usize..6, 0usize..6, 0.0f64..10.0), 1..12).prop_map(
            |edges| {
                let mut builder = RailNetworkBuilder::new();
                for (a, b, weight) in edges {
                    if a == b {
                        continue;
                    }
                    builder = builder
                        .connect(&format!("S{a}"), &format!("S{b}"), weight)
                        .unwrap();
                }
                builder.build()
            },
        )
    }

    proptest! {
        /// Every reported distance is the true minimum over all paths,
        /// and every omission means no path exists.
        #[test]
        fn matches_brute_force(network in arb_network()) {
            let stations: Vec<Station> = network.stations().cloned().collect();
            for from in &stations {
                let table = shortest_paths(&network, from);
                for to in &stations {
                    match (table.distance(to), brute_force(&network, from, to)) {
                        (Some(actual), Some(expected)) => {
                            prop_assert!(
                                (actual - expected).abs() < 1e-9,
                                "{from} -> {to}: {actual} != {expected}"
                            );
                        }
                        (None, None) => {}
                        (actual, expected) => {
                            prop_assert!(false, "{from} -> {to}: {actual:?} vs {expected:?}");
                        }
                    }
                }
            }
        }

        /// Undirected weights make distances symmetric.
        #[test]
        fn distance_is_symmetric(network in arb_network()) {
            let stations: Vec<Station> = network.stations().cloned().collect();
            for a in &stations {
                let from_a = shortest_paths(&network, a);
                for b in &stations {
                    let from_b = shortest_paths(&network, b);
                    match (from_a.distance(b), from_b.distance(a)) {
                        (Some(x), Some(y)) => prop_assert!((x - y).abs() < 1e-9),
                        (None, None) => {}
                        (x, y) => {
                            prop_assert!(
                                false,
                                "asymmetric reachability {a} / {b}: {x:?} vs {y:?}"
                            );
                        }
                    }
                }
            }
        }

        /// A reconstructed path starts at the origin, ends at the
        /// destination, and walks real connections whose weights sum to
        /// the reported distance.
        #[test]
        fn paths_walk_real_connections(network in arb_network()) {
            let stations: Vec<Station> = network.stations().cloned().collect();
            let Some(origin) = stations.first() else {
                return Ok(());
            };

            let table = shortest_paths(&network, origin);
            for to in &stations {
                let Some(path) = table.path_to(to) else {
                    continue;
                };
                prop_assert_eq!(path.first(), Some(origin));
                prop_assert_eq!(path.last(), Some(to));

                let mut travelled = 0.0;
                for pair in path.windows(2) {
                    let hop = network
                        .neighbors(&pair[0])
                        .iter()
                        .filter(|link| link.to == pair[1])
                        .map(|link| link.weight)
                        .min_by(f64::total_cmp);
                    prop_assert!(
                        hop.is_some(),
                        "path hop {} -> {} is not a connection",
                        pair[0],
                        pair[1]
                    );
                    travelled += hop.unwrap();
                }
                prop_assert!((travelled - table.distance(to).unwrap()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn brute_force_oracle_sanity() {
        let network = RailNetworkBuilder::new()
            .connect("A", "B", 1.0)
            .unwrap()
            .connect("B", "C", 1.0)
            .unwrap()
            .connect("A", "C", 5.0)
            .unwrap()
            .build();

        let best = brute_force(&network, &station("A"), &station("C")).unwrap();
        assert!((best - 2.0).abs() < 1e-9);
    }
}
