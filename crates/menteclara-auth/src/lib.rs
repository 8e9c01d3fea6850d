//! menteclara-auth
//!
//! Authentication and capability rules. Everything here is a pure function
//! over account records; the store supplies the records through
//! [`flows::Directory`].

pub mod access;
pub mod error;
pub mod flows;
