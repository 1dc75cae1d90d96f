pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/swplanet.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

pub const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["swplanet.toml", "config/swplanet.toml"];
