//! menteclara-store
//!
//! The authoritative in-memory account and assignment store. Every view of a
//! patient is read from here by id.

pub mod audit;
pub mod error;
pub mod progress;
pub mod seed;
pub mod store;
