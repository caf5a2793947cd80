//! Rail network shortest-path planner.
//!
//! Builds an undirected weighted graph of rail connections from a
//! line-oriented edge list and answers single-source shortest-path
//! queries over it, with textual views for visualization and reporting.

pub mod domain;
pub mod export;
pub mod input;
pub mod network;
pub mod planner;
pub mod report;
