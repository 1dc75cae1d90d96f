use std::{fmt, sync::Arc};

use swplanet_core::{
    application::catalog::PlanetCatalogService, database::DatabaseContext,
};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PlanetCatalogService>,
    pub database: DatabaseContext,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(database: DatabaseContext, config: Arc<Config>) -> Self {
        let catalog = Arc::new(PlanetCatalogService::new(database.planets()));
        Self {
            catalog,
            database,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
