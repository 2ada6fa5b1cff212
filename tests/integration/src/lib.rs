//! Integration test support
//!
//! Spawns real servers on loopback ports against in-memory SQLite
//! databases, one per test, and provides request and fixture helpers.

pub mod fixtures;
pub mod helpers;
