//! Core data model definitions shared across swplanet crates.

pub mod ids;
pub mod planet;

pub use ids::PlanetId;
pub use planet::Planet;
