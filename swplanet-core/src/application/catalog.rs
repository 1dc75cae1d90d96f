use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use swplanet_model::{Planet, PlanetId};
use tracing::debug;

use crate::database::ports::PlanetsRepository;
use crate::error::Result;
use crate::query::PlanetFilter;

/// Catalog operations exposed to the HTTP layer.
///
/// Every call is a single pass-through to the repository; store errors are
/// returned unchanged so the boundary can map them to status codes.
#[derive(Clone)]
pub struct PlanetCatalogService {
    planets: Arc<dyn PlanetsRepository>,
}

impl fmt::Debug for PlanetCatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanetCatalogService")
            .field("planets", &type_name_of_val(self.planets.as_ref()))
            .finish()
    }
}

impl PlanetCatalogService {
    pub fn new(planets: Arc<dyn PlanetsRepository>) -> Self {
        Self { planets }
    }

    /// Persists `planet` and returns it with the assigned id.
    pub async fn create(&self, planet: Planet) -> Result<Planet> {
        let id = self.planets.create(&planet).await?;
        Ok(planet.with_id(id))
    }

    pub async fn get(&self, id: PlanetId) -> Result<Option<Planet>> {
        self.planets.get_by_id(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>> {
        self.planets.get_by_name(name).await
    }

    pub async fn list(
        &self,
        terrain: Option<String>,
        climate: Option<String>,
    ) -> Result<Vec<Planet>> {
        let template = Planet::from_criteria(climate, terrain);
        let filter = PlanetFilter::from_template(&template);
        debug!(?filter, "Listing planets");
        self.planets.list_filtered(&filter).await
    }

    pub async fn remove(&self, id: PlanetId) -> Result<()> {
        self.planets.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Mirrors the store constraints of the `planets` table.
    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<Planet>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl PlanetsRepository for InMemoryRepo {
        async fn create(&self, planet: &Planet) -> Result<PlanetId> {
            if [&planet.name, &planet.climate, &planet.terrain]
                .iter()
                .any(|value| value.trim().is_empty())
            {
                return Err(CatalogError::Validation("blank field".into()));
            }

            let mut rows = self.rows.lock().await;
            if rows.iter().any(|row| row.name == planet.name) {
                return Err(CatalogError::UniqueViolation(planet.name.clone()));
            }

            let mut next_id = self.next_id.lock().await;
            *next_id += 1;
            let id = PlanetId::new(*next_id);
            rows.push(planet.clone().with_id(id));
            Ok(id)
        }

        async fn get_by_id(&self, id: PlanetId) -> Result<Option<Planet>> {
            let rows = self.rows.lock().await;
            Ok(rows.iter().find(|row| row.id == Some(id)).cloned())
        }

        async fn get_by_name(&self, name: &str) -> Result<Option<Planet>> {
            let rows = self.rows.lock().await;
            Ok(rows.iter().find(|row| row.name == name).cloned())
        }

        async fn list_filtered(
            &self,
            filter: &PlanetFilter,
        ) -> Result<Vec<Planet>> {
            let rows = self.rows.lock().await;
            Ok(rows.iter().filter(|row| filter.matches(row)).cloned().collect())
        }

        async fn delete_by_id(&self, id: PlanetId) -> Result<()> {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|row| row.id != Some(id));
            if rows.len() == before {
                return Err(CatalogError::NotFound(id.to_string()));
            }
            Ok(())
        }
    }

    fn service() -> PlanetCatalogService {
        PlanetCatalogService::new(Arc::new(InMemoryRepo::default()))
    }

    async fn seeded() -> PlanetCatalogService {
        let catalog = service();
        for planet in [
            Planet::new("Tatooine", "arid", "desert"),
            Planet::new("Alderaan", "temperate", "grasslands, mountains"),
            Planet::new(
                "Yavin IV",
                "temperate, tropical",
                "jungle, rainforests",
            ),
        ] {
            catalog.create(planet).await.unwrap();
        }
        catalog
    }

    #[tokio::test]
    async fn create_returns_planet_with_assigned_id() {
        let catalog = service();
        let created = catalog
            .create(Planet::new("Hoth", "frozen", "tundra"))
            .await
            .unwrap();

        assert!(created.is_persisted());
        let fetched = catalog.get(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn create_propagates_validation_errors() {
        let catalog = service();
        let err = catalog.create(Planet::new("", "", "")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(catalog.list(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_propagates_unique_violations() {
        let catalog = service();
        catalog
            .create(Planet::new("Hoth", "frozen", "tundra"))
            .await
            .unwrap();
        let err = catalog
            .create(Planet::new("Hoth", "frozen", "ice caves"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn lookups_of_unknown_keys_are_empty() {
        let catalog = service();
        assert_eq!(catalog.get(PlanetId::new(1)).await.unwrap(), None);
        assert_eq!(catalog.get_by_name("Dagobah").await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_by_name_is_exact() {
        let catalog = seeded().await;
        let found = catalog.get_by_name("Tatooine").await.unwrap().unwrap();
        assert_eq!(found.climate, "arid");
        assert_eq!(catalog.get_by_name("tatooine").await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_without_criteria_returns_everything_in_order() {
        let catalog = seeded().await;
        let names: Vec<_> = catalog
            .list(None, None)
            .await
            .unwrap()
            .into_iter()
            .map(|planet| planet.name)
            .collect();
        assert_eq!(names, ["Tatooine", "Alderaan", "Yavin IV"]);
    }

    #[tokio::test]
    async fn list_applies_terrain_and_climate() {
        let catalog = seeded().await;
        let planets = catalog
            .list(Some("desert".into()), Some("arid".into()))
            .await
            .unwrap();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].name, "Tatooine");

        let temperate = catalog
            .list(None, Some("temperate".into()))
            .await
            .unwrap();
        assert_eq!(temperate.len(), 1);
        assert_eq!(temperate[0].name, "Alderaan");
    }

    #[tokio::test]
    async fn remove_twice_reports_not_found() {
        let catalog = seeded().await;
        let alderaan = catalog.get_by_name("Alderaan").await.unwrap().unwrap();
        let id = alderaan.id.unwrap();

        catalog.remove(id).await.unwrap();
        assert_eq!(catalog.get(id).await.unwrap(), None);

        let err = catalog.remove(id).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
