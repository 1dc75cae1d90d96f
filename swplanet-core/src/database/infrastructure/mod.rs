//! Store adapters implementing the database ports.

pub mod sqlite;
