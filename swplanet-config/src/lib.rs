//! Shared configuration library for swplanet.
//!
//! Configuration is composed from three layers, highest precedence first:
//! environment variables (optionally seeded from a `.env` file), a TOML file,
//! and built-in defaults. The server re-exports these types so there is a
//! single source of truth for defaults and guard rails.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
