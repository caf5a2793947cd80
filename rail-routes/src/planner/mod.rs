//! Shortest-path planning over the rail network.
//!
//! Implements Dijkstra's algorithm: given the network and an origin
//! station, computes the minimal cumulative distance and shortest-path
//! predecessor for every reachable station. The planner keeps no state of
//! its own; each query is a pure function of the network's contents.

mod dijkstra;

pub use dijkstra::{DistanceTable, shortest_paths};
