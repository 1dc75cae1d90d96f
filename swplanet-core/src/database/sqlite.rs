use std::{fmt, str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::{
    MIGRATOR,
    database::infrastructure::sqlite::SqlitePlanetsRepository,
    error::{CatalogError, Result},
};

/// Statistics about the connection pool
#[derive(Debug, Clone)]
pub struct PoolStats {
    pub size: u32,
    pub idle: u32,
    pub max_size: u32,
}

/// Connection pool plus the repositories built on top of it.
///
/// Constructors apply the embedded migrations before returning, so a value
/// of this type always points at an up-to-date schema.
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
    max_connections: u32,
    planets: SqlitePlanetsRepository,
}

impl fmt::Debug for SqliteDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteDatabase")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl SqliteDatabase {
    pub async fn connect(
        connection_string: &str,
        max_connections: u32,
    ) -> Result<Self> {
        if connection_string.contains(":memory:") {
            return Self::in_memory().await;
        }

        let connect_options = SqliteConnectOptions::from_str(connection_string)
            .map_err(|e| {
                CatalogError::Internal(format!("Invalid database URL: {}", e))
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Database connection failed: {}",
                    e
                ))
            })?;

        info!(max_connections, "Database pool initialized");

        Self::from_pool(pool, max_connections).await
    }

    /// Private in-memory store, mainly for tests.
    ///
    /// The pool holds exactly one connection that never expires; a second
    /// connection would open a different, empty database.
    pub async fn in_memory() -> Result<Self> {
        let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| {
                CatalogError::Internal(format!("Invalid database URL: {}", e))
            })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Database connection failed: {}",
                    e
                ))
            })?;

        Self::from_pool(pool, 1).await
    }

    async fn from_pool(pool: SqlitePool, max_connections: u32) -> Result<Self> {
        let database = Self {
            planets: SqlitePlanetsRepository::new(pool.clone()),
            pool,
            max_connections,
        };
        database.initialize_schema().await?;
        Ok(database)
    }

    /// Apply pending migrations.
    pub async fn initialize_schema(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Database migration failed: {}",
                    e
                ))
            })?;
        info!("Database schema is up to date");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn planets(&self) -> SqlitePlanetsRepository {
        self.planets.clone()
    }

    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.size(),
            idle: self.pool.num_idle() as u32,
            max_size: self.max_connections,
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
