pub mod planets;

pub use planets::PlanetsRepository;
