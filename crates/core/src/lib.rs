//! Domain logic for the Quickfire fantasy-league scoring service.
//!
//! Everything in this crate is pure and synchronous: no I/O, no shared
//! state. The db and api crates depend on it, never the other way around.

pub mod error;
pub mod scoring;
pub mod standings;
pub mod status;
pub mod types;
