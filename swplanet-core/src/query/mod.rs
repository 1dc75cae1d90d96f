pub mod filter;

pub use filter::PlanetFilter;
