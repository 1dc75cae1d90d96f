use async_trait::async_trait;
use swplanet_model::{Planet, PlanetId};

use crate::error::Result;
use crate::query::PlanetFilter;

/// Persistence port for the planet catalog.
///
/// Implementations classify store failures into [`CatalogError`] variants:
/// blank required fields surface as `Validation`, name collisions as
/// `UniqueViolation`, and deleting a missing row as `NotFound`. Point lookups
/// that find nothing return `Ok(None)`.
///
/// [`CatalogError`]: crate::error::CatalogError
#[async_trait]
pub trait PlanetsRepository: Send + Sync {
    /// Stores the planet and returns the identifier the store assigned.
    async fn create(&self, planet: &Planet) -> Result<PlanetId>;
    async fn get_by_id(&self, id: PlanetId) -> Result<Option<Planet>>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Planet>>;
    /// Returns matching planets in insertion order.
    async fn list_filtered(&self, filter: &PlanetFilter) -> Result<Vec<Planet>>;
    async fn delete_by_id(&self, id: PlanetId) -> Result<()>;
}
