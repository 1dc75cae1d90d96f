pub mod context;
pub mod infrastructure;
pub mod ports;
pub mod sqlite;

pub use context::DatabaseContext;
pub use sqlite::{PoolStats, SqliteDatabase};
