//! Domain types for the rail network.
//!
//! The types here represent validated data: a `Station` is non-blank by
//! construction, and connection invariants are checked when the network
//! records them. Code that receives these types can trust their validity.

mod error;
mod station;

pub use error::DomainError;
pub use station::{InvalidStation, Station};
