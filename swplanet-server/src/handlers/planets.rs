use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use swplanet_model::{Planet, PlanetId};
use tracing::{debug, info};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Default, Deserialize)]
pub struct PlanetListQuery {
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

/// Create a planet
///
/// # Request
///
/// ```json
/// { "name": "Tatooine", "climate": "arid", "terrain": "desert" }
/// ```
///
/// # Response
///
/// - `201 Created` with the stored planet, including its `id`
/// - `422 Unprocessable Entity` if any field is missing or blank
/// - `409 Conflict` if the name is already taken
pub async fn create_planet_handler(
    State(state): State<AppState>,
    payload: Result<Json<Planet>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    let Json(planet) = payload?;
    let created = state.catalog.create(planet).await?;
    info!(
        planet.id = ?created.id,
        planet.name = %created.name,
        "planet created via api"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_planet_handler(
    State(state): State<AppState>,
    id: Result<Path<PlanetId>, PathRejection>,
) -> AppResult<Json<Planet>> {
    let Path(id) = id?;
    state
        .catalog
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no planet with id {}", id)))
}

pub async fn get_planet_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Planet>> {
    state
        .catalog
        .get_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found(format!("no planet named '{}'", name))
        })
}

/// List planets, optionally narrowed by exact `climate` and `terrain`.
pub async fn list_planets_handler(
    State(state): State<AppState>,
    query: Result<Query<PlanetListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Planet>>> {
    let Query(PlanetListQuery { climate, terrain }) = query?;
    let planets = state.catalog.list(terrain, climate).await?;
    debug!(count = planets.len(), "planets listed via api");
    Ok(Json(planets))
}

pub async fn delete_planet_handler(
    State(state): State<AppState>,
    id: Result<Path<PlanetId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.catalog.remove(id).await?;
    info!(planet.id = %id, "planet deleted via api");
    Ok(StatusCode::NO_CONTENT)
}
