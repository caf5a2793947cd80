//! Domain error types.
//!
//! These errors represent construction-time invariant violations in the
//! rail network. Rejecting them before any query runs keeps the planner's
//! non-negative-weight assumption intact.

use super::Station;

/// Validation failures when recording a connection.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Connection weight is below zero
    #[error("connection weight must be non-negative, got {0}")]
    NegativeWeight(f64),

    /// Connection weight is NaN or infinite
    #[error("connection weight must be finite, got {0}")]
    NonFiniteWeight(f64),

    /// Both ends of the connection are the same station
    #[error("connection must join two distinct stations, got {0} twice")]
    SelfLoop(Station),
}
