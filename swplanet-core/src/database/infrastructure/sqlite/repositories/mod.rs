//! SQLite-backed repository implementations.

pub mod planets;
