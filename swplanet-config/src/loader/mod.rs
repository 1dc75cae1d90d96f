pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{
        DEFAULT_CONFIG_LOCATIONS, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS,
        DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    },
    models::{
        Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigWarnings},
};

use error::ConfigLoadError;

/// Result of a successful load: the effective config plus anything the
/// operator should be told about it.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load `.env`, then compose file and process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded =
            dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?;

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose configuration from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            self.compose_config(file_config, env, config_path)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(Path::new)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.to_path_buf(),
                None => return Ok((None, None)),
            },
        };

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No swplanet.toml detected; \
                 using environment variables and defaults",
                "Create swplanet.toml or set SWPLANET_CONFIG_PATH \
                 to pin settings",
            );
        }

        let FileConfig {
            server: file_server,
            database: file_database,
            cors: file_cors,
        } = file_config.unwrap_or_default();

        let env_port = env
            .server_port
            .as_deref()
            .map(|raw| parse_number::<u16>("SERVER_PORT", raw))
            .transpose()?;
        let server = ServerConfig {
            host: env
                .server_host
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: env_port.or(file_server.port).unwrap_or(DEFAULT_SERVER_PORT),
        };

        let env_max_connections = env
            .database_max_connections
            .as_deref()
            .map(|raw| parse_number::<u32>("DB_MAX_CONNECTIONS", raw))
            .transpose()?;
        let mut database = DatabaseConfig {
            url: env
                .database_url
                .or(file_database.url.filter(|url| !url.trim().is_empty()))
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: env_max_connections
                .or(file_database.max_connections)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };

        // Every connection to `:memory:` opens its own empty database.
        if database.is_in_memory() && database.max_connections > 1 {
            warnings.push(format!(
                "In-memory database limits the pool to 1 connection \
                 (requested {})",
                database.max_connections
            ));
            database.max_connections = 1;
        }

        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .or(file_cors.allowed_origins)
                .unwrap_or_default(),
        };

        let config = Config {
            server,
            database,
            cors,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded: false,
            },
        };

        let guard_warnings = validation::apply_guard_rails(&config)?;
        warnings.extend(guard_warnings);

        Ok((config, warnings))
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    raw: &str,
) -> Result<T, ConfigLoadError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigLoadError::InvalidNumber {
            name,
            value: raw.to_string(),
        })
}
