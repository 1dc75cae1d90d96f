//! # swplanet Server
//!
//! REST surface over the planet catalog.
//!
//! | Method   | Path                   | Success            |
//! |----------|------------------------|--------------------|
//! | `POST`   | `/planets`             | `201` with planet  |
//! | `GET`    | `/planets/{id}`        | `200` with planet  |
//! | `GET`    | `/planets/name/{name}` | `200` with planet  |
//! | `GET`    | `/planets`             | `200` with list    |
//! | `DELETE` | `/planets/{id}`        | `204`              |
//!
//! Listing accepts optional `terrain` and `climate` query parameters that
//! match exactly. Failures carry a JSON body of the form
//! `{"error": {"message": ..., "status": ...}}`.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
