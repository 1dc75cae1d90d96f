use std::sync::Arc;

use anyhow::{Context, Result};
use axum_test::TestServer;
use serde_json::{Value, json};
use swplanet_core::database::DatabaseContext;
use swplanet_server::{
    AppState,
    infra::config::{
        Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig,
    },
    routes::create_app,
};

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".into()],
        },
        metadata: ConfigMetadata::default(),
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

pub async fn build_test_app() -> Result<TestApp> {
    let database = DatabaseContext::in_memory()
        .await
        .context("failed to open in-memory database")?;
    let state = AppState::new(database, Arc::new(test_config()));
    let server = TestServer::builder()
        .http_transport()
        .build(create_app(state.clone()))
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;

    Ok(TestApp { server, state })
}

pub fn tatooine() -> Value {
    json!({ "name": "Tatooine", "climate": "arid", "terrain": "desert" })
}

pub fn alderaan() -> Value {
    json!({
        "name": "Alderaan",
        "climate": "temperate",
        "terrain": "grasslands, mountains"
    })
}

pub fn yavin_iv() -> Value {
    json!({
        "name": "Yavin IV",
        "climate": "temperate, tropical",
        "terrain": "jungle, rainforests"
    })
}

pub async fn seed(server: &TestServer) -> Vec<Value> {
    let mut created = Vec::new();
    for planet in [tatooine(), alderaan(), yavin_iv()] {
        let response = server.post("/planets").json(&planet).await;
        created.push(response.json::<Value>());
    }
    created
}
