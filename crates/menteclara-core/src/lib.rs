//! menteclara-core
//!
//! Pure domain types: accounts, patients, exercises, tasks and progress.
//! No I/O and no HTTP dependency. This is the shared vocabulary of the
//! MenteClara system.

pub mod error;
pub mod models;
