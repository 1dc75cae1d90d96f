use std::fmt;

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool, error::ErrorKind};
use swplanet_model::{Planet, PlanetId};
use tracing::{debug, info};

use crate::database::ports::planets::PlanetsRepository;
use crate::error::{CatalogError, Result};
use crate::query::PlanetFilter;

const SELECT_PLANETS: &str = "SELECT id, name, climate, terrain FROM planets";

#[derive(Debug, sqlx::FromRow)]
struct PlanetRow {
    id: PlanetId,
    name: String,
    climate: String,
    terrain: String,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Planet {
            id: Some(row.id),
            name: row.name,
            climate: row.climate,
            terrain: row.terrain,
        }
    }
}

/// SQLite-backed implementation of the `PlanetsRepository` port.
#[derive(Clone, Debug)]
pub struct SqlitePlanetsRepository {
    pool: SqlitePool,
}

impl SqlitePlanetsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PlanetsRepository for SqlitePlanetsRepository {
    async fn create(&self, planet: &Planet) -> Result<PlanetId> {
        ensure_populated(planet)?;

        let result = sqlx::query(
            r#"
            INSERT INTO planets (name, climate, terrain)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&planet.name)
        .bind(&planet.climate)
        .bind(&planet.terrain)
        .execute(self.pool())
        .await
        .map_err(|e| classify_write_error(e, planet))?;

        let id = PlanetId::new(result.last_insert_rowid());
        info!(planet.id = %id, planet.name = %planet.name, "Created planet");
        Ok(id)
    }

    async fn get_by_id(&self, id: PlanetId) -> Result<Option<Planet>> {
        let sql = format!("{SELECT_PLANETS} WHERE id = ?1");
        let row = sqlx::query_as::<_, PlanetRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Failed to get planet by id {}: {}",
                    id, e
                ))
            })?;

        Ok(row.map(Planet::from))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Planet>> {
        let sql = format!("{SELECT_PLANETS} WHERE name = ?1");
        let row = sqlx::query_as::<_, PlanetRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Failed to get planet by name: {}",
                    e
                ))
            })?;

        Ok(row.map(Planet::from))
    }

    async fn list_filtered(
        &self,
        filter: &PlanetFilter,
    ) -> Result<Vec<Planet>> {
        let mut qb = FilteredPlanetQueryBuilder::new(filter).build();

        let rows = qb
            .build_query_as::<PlanetRow>()
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                CatalogError::Internal(format!("Failed to list planets: {}", e))
            })?;

        debug!(
            climate = ?filter.climate,
            terrain = ?filter.terrain,
            matches = rows.len(),
            "Listed planets"
        );
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn delete_by_id(&self, id: PlanetId) -> Result<()> {
        let result = sqlx::query("DELETE FROM planets WHERE id = ?1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Failed to delete planet {}: {}",
                    id, e
                ))
            })?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!(
                "no planet with id {}",
                id
            )));
        }

        info!(planet.id = %id, "Deleted planet");
        Ok(())
    }
}

/// Rejects blank fields up front; the table CHECKs only know ASCII and
/// no-break spaces.
fn ensure_populated(planet: &Planet) -> Result<()> {
    for (field, value) in [
        ("name", &planet.name),
        ("climate", &planet.climate),
        ("terrain", &planet.terrain),
    ] {
        if value.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "{field} must not be blank"
            )));
        }
    }
    Ok(())
}

/// Maps constraint violations raised by the `planets` table onto the catalog
/// error taxonomy.
fn classify_write_error(err: sqlx::Error, planet: &Planet) -> CatalogError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.kind() {
            ErrorKind::UniqueViolation => {
                return CatalogError::UniqueViolation(format!(
                    "a planet named '{}' already exists",
                    planet.name
                ));
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                return CatalogError::Validation(format!(
                    "name, climate and terrain must not be blank ({})",
                    db_err.message()
                ));
            }
            _ => {}
        }
    }
    CatalogError::Internal(format!("Failed to create planet: {}", err))
}

/// Translates a [`PlanetFilter`] into a parameterised listing query.
struct FilteredPlanetQueryBuilder<'a> {
    filter: &'a PlanetFilter,
    qb: QueryBuilder<'a, Sqlite>,
    has_condition: bool,
}

impl<'a> fmt::Debug for FilteredPlanetQueryBuilder<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredPlanetQueryBuilder")
            .field("filters", &self.filter)
            .field("has_condition", &self.has_condition)
            .field("query_builder", &"<sqlx::QueryBuilder<Sqlite>>")
            .finish()
    }
}

impl<'a> FilteredPlanetQueryBuilder<'a> {
    fn new(filter: &'a PlanetFilter) -> Self {
        Self {
            filter,
            qb: QueryBuilder::new(SELECT_PLANETS),
            has_condition: false,
        }
    }

    fn build(mut self) -> QueryBuilder<'a, Sqlite> {
        self.apply_filters();
        self.qb.push(" ORDER BY id ASC");
        self.qb
    }

    fn apply_filters(&mut self) {
        if self.filter.is_unconstrained() {
            return;
        }

        if let Some(climate) = self.filter.climate.as_deref() {
            self.push_equals("climate", climate);
        }

        if let Some(terrain) = self.filter.terrain.as_deref() {
            self.push_equals("terrain", terrain);
        }
    }

    fn push_equals(&mut self, column: &'static str, value: &str) {
        self.qb.push(if self.has_condition { " AND " } else { " WHERE " });
        self.qb.push(column);
        self.qb.push(" = ");
        self.qb.push_bind(value.to_owned());
        self.has_condition = true;
    }
}
