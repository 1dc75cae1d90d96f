pub mod catalog;

pub use catalog::PlanetCatalogService;
