//! # swplanet Core
//!
//! Persistence and catalog logic for the swplanet service.
//!
//! - [`query`]: translates a template planet into a listing filter
//! - [`database`]: repository port plus the SQLite adapter behind it
//! - [`application`]: the catalog service the HTTP layer talks to
//! - [`error`]: the error taxonomy shared by every layer
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use swplanet_core::{
//!     application::catalog::PlanetCatalogService, database::SqliteDatabase,
//! };
//! use swplanet_model::Planet;
//!
//! async fn seed() -> swplanet_core::Result<()> {
//!     let db = SqliteDatabase::connect("sqlite://data/swplanet.db", 5).await?;
//!     let catalog = PlanetCatalogService::new(Arc::new(db.planets()));
//!     let tatooine = Planet::new("Tatooine", "arid", "desert");
//!     let tatooine = catalog.create(tatooine).await?;
//!     println!("created {:?}", tatooine.id);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Catalog service composed over the repository port
pub mod application;

/// Repository port and SQLite-backed implementation
pub mod database;

/// Error types and error handling utilities
pub mod error;

/// Listing filter construction
pub mod query;

pub use error::{CatalogError, Result};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
