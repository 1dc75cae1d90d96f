pub use swplanet_config::{
    Config, ConfigLoad, ConfigLoadError, ConfigLoader, ConfigMetadata,
    ConfigWarnings, CorsConfig, DatabaseConfig, ServerConfig, constants, loader,
    models, validation,
};
