use thiserror::Error;

use crate::models::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint(
        &mut self,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("database max_connections must be at least 1")]
    ZeroConnections,
    #[error("unsupported database URL '{url}': only sqlite: URLs work")]
    UnsupportedDatabaseUrl { url: String },
    #[error("server host must not be empty")]
    EmptyHost,
}

/// Reject configurations the server cannot run with and collect warnings
/// for ones it can run with but probably should not.
pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.server.host.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyHost);
    }

    if !config.database.url.starts_with("sqlite:") {
        return Err(ConfigGuardRailError::UnsupportedDatabaseUrl {
            url: config.database.url.clone(),
        });
    }

    if config.database.max_connections == 0 {
        return Err(ConfigGuardRailError::ZeroConnections);
    }

    if config.database.is_in_memory() {
        warnings.push_with_hint(
            "Using an in-memory database; planets are lost on shutdown",
            "Point DATABASE_URL at a sqlite file to persist the catalog",
        );
    }

    if config.cors.is_wildcard_included() {
        warnings.push("CORS allows any origin ('*')");
    }

    Ok(warnings)
}
