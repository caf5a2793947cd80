//! The rail network graph store.
//!
//! Holds stations and the weighted undirected connections between them.
//! Connections are symmetric: a line from A to B can be travelled from B
//! to A at the same weight, so every connection is recorded in both
//! directions. The store is edge-driven: a station exists once it appears
//! in a connection.

use std::collections::HashMap;

use crate::domain::{DomainError, InvalidStation, Station};

/// A directed adjacency: the far end of a connection and its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// The adjacent station.
    pub to: Station,
    /// Distance to the adjacent station.
    pub weight: f64,
}

/// An undirected weighted graph of rail connections.
///
/// Built once per run from the full edge list, then treated as read-only
/// by shortest-path queries. Re-adding a pair keeps the earlier entry as a
/// parallel connection; the planner resolves parallels to the minimum
/// weight, so redundant records are harmless.
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    adjacency: HashMap<Station, Vec<Link>>,
}

impl RailNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected connection between two distinct stations.
    ///
    /// Both directions of traversal are registered and both stations
    /// become known vertices. Fails fast on a negative or non-finite
    /// weight and on a self-loop; a rejected connection leaves the
    /// network unchanged.
    pub fn add_connection(
        &mut self,
        a: Station,
        b: Station,
        weight: f64,
    ) -> Result<(), DomainError> {
        if !weight.is_finite() {
            return Err(DomainError::NonFiniteWeight(weight));
        }
        if weight < 0.0 {
            return Err(DomainError::NegativeWeight(weight));
        }
        if a == b {
            return Err(DomainError::SelfLoop(a));
        }

        self.adjacency.entry(a.clone()).or_default().push(Link {
            to: b.clone(),
            weight,
        });
        self.adjacency
            .entry(b)
            .or_default()
            .push(Link { to: a, weight });

        Ok(())
    }

    /// Stations reachable by one direct connection from `station`.
    ///
    /// An unknown station has no neighbours; this is not an error.
    pub fn neighbors(&self, station: &Station) -> &[Link] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every directed adjacency known to the store.
    ///
    /// Both directions of each undirected connection are surfaced, so the
    /// caller sees one entry per source vertex per neighbour. Order is
    /// unspecified.
    pub fn connections(&self) -> impl Iterator<Item = (&Station, &Link)> {
        self.adjacency
            .iter()
            .flat_map(|(from, links)| links.iter().map(move |link| (from, link)))
    }

    /// All known station names, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.adjacency.keys()
    }

    /// Number of known stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// True when no connection has been added.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Error from [`RailNetworkBuilder`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    /// A station name failed validation
    #[error(transparent)]
    Station(#[from] InvalidStation),

    /// The connection violated a network invariant
    #[error(transparent)]
    Connection(#[from] DomainError),
}

/// Builder for assembling a network from raw station names.
///
/// Each step fails fast, so an invalid entry surfaces at the call that
/// introduced it rather than being silently dropped.
#[derive(Debug, Default)]
pub struct RailNetworkBuilder {
    inner: RailNetwork,
}

impl RailNetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection, parsing both station names.
    pub fn connect(mut self, a: &str, b: &str, weight: f64) -> Result<Self, BuildError> {
        let a = Station::parse(a)?;
        let b = Station::parse(b)?;
        self.inner.add_connection(a, b, weight)?;
        Ok(self)
    }

    /// Build the network.
    pub fn build(self) -> RailNetwork {
        self.inner
    }
}
