use std::fmt;
use std::sync::Arc;

use crate::database::{SqliteDatabase, ports::PlanetsRepository};
use crate::error::Result;

/// Bundles the SQLite adapter with the repository handles handed to
/// application services.
#[derive(Clone)]
pub struct DatabaseContext {
    sqlite: Arc<SqliteDatabase>,
    planets: Arc<dyn PlanetsRepository>,
}

impl fmt::Debug for DatabaseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseContext")
            .field("sqlite", &self.sqlite)
            .field("planets_ptr", &Arc::as_ptr(&self.planets))
            .finish()
    }
}

impl DatabaseContext {
    /// Open (creating if needed) the SQLite store and migrate it.
    pub async fn connect_sqlite(
        connection_string: &str,
        max_connections: u32,
    ) -> Result<Self> {
        let sqlite = Arc::new(
            SqliteDatabase::connect(connection_string, max_connections).await?,
        );
        Ok(Self::from_sqlite(sqlite))
    }

    pub async fn in_memory() -> Result<Self> {
        let sqlite = Arc::new(SqliteDatabase::in_memory().await?);
        Ok(Self::from_sqlite(sqlite))
    }

    pub fn from_sqlite(sqlite: Arc<SqliteDatabase>) -> Self {
        let planets: Arc<dyn PlanetsRepository> = Arc::new(sqlite.planets());
        Self { sqlite, planets }
    }

    pub fn planets(&self) -> Arc<dyn PlanetsRepository> {
        Arc::clone(&self.planets)
    }

    pub fn sqlite(&self) -> Arc<SqliteDatabase> {
        Arc::clone(&self.sqlite)
    }
}
