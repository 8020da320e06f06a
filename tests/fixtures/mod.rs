//! Test fixtures for pool-router.
//!
//! Provides synthetic road graphs with known shortest paths and a
//! builder for ride requests.

pub mod graphs;
pub mod rides;

pub use graphs::*;
pub use rides::*;
