use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    AppState,
    handlers::planets::{
        create_planet_handler, delete_planet_handler,
        get_planet_by_name_handler, get_planet_handler, list_planets_handler,
    },
    infra::config::CorsConfig,
};

/// Planet catalog routes, without state or middleware.
pub fn create_planet_router() -> Router<AppState> {
    Router::new()
        .route(
            "/planets",
            get(list_planets_handler).post(create_planet_handler),
        )
        .route(
            "/planets/{id}",
            get(get_planet_handler).delete(delete_planet_handler),
        )
        .route("/planets/name/{name}", get(get_planet_by_name_handler))
}

/// Full application: routes, request tracing and CORS.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config().cors);

    create_planet_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let any_origin =
        cors.allowed_origins.is_empty() || cors.is_wildcard_included();
    let allow_origin = if any_origin {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
