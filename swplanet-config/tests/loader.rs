use std::fs;
use std::path::PathBuf;

use swplanet_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, EnvConfig, constants,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("swplanet.toml");
    fs::write(&path, contents).expect("write config file");
    path
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
host = "127.0.0.1"
port = 8080

[database]
url = "sqlite://planets.db"
max_connections = 3

[cors]
allowed_origins = ["http://localhost:5173"]
"#,
    );

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap();

    let config = load.config;
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
    assert_eq!(config.database.url, "sqlite://planets.db");
    assert_eq!(config.database.max_connections, 3);
    assert_eq!(config.cors.allowed_origins, ["http://localhost:5173"]);
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
port = 8080

[database]
url = "sqlite://from-file.db"
"#,
    );

    let env = EnvConfig {
        server_port: Some("9090".into()),
        database_url: Some("sqlite://from-env.db".into()),
        ..EnvConfig::default()
    };
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env)
        .unwrap()
        .config;

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, constants::DEFAULT_SERVER_HOST);
    assert_eq!(config.database.url, "sqlite://from-env.db");
    assert_eq!(
        config.database.max_connections,
        constants::DEFAULT_MAX_CONNECTIONS
    );
}

#[test]
fn config_path_from_environment_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[server]\nport = 4000\n");

    let env = EnvConfig {
        config_path: Some(path.clone()),
        ..EnvConfig::default()
    };
    let config = ConfigLoader::new().load_with_env(env).unwrap().config;

    assert_eq!(config.server.port, 4000);
    assert_eq!(config.metadata.config_path, Some(path));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::MissingConfig { path } if path == missing
    ));
}

#[test]
fn unknown_keys_fail_to_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[server]\nhostname = \"localhost\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn malformed_port_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "");

    let env = EnvConfig {
        server_port: Some("eighty".into()),
        ..EnvConfig::default()
    };
    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env)
        .unwrap_err();

    match err {
        ConfigLoadError::InvalidNumber { name, value } => {
            assert_eq!(name, "SERVER_PORT");
            assert_eq!(value, "eighty");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_sqlite_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "[database]\nurl = \"postgres://localhost/planets\"\n",
    );

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(
            ConfigGuardRailError::UnsupportedDatabaseUrl { .. }
        )
    ));
}

#[test]
fn zero_connections_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[database]\nmax_connections = 0\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::ZeroConnections)
    ));
}

#[test]
fn in_memory_database_is_clamped_to_one_connection() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "");

    let env = EnvConfig {
        database_url: Some(constants::IN_MEMORY_DATABASE_URL.into()),
        database_max_connections: Some("8".into()),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env)
        .unwrap();

    assert_eq!(load.config.database.max_connections, 1);
    assert_eq!(load.warnings.len(), 2);
    assert!(
        load.warnings
            .items
            .iter()
            .any(|warning| warning.message.contains("in-memory database"))
    );
}
