//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every field has a default.

mod database;
mod logging;
mod server;

pub use database::FileDatabaseConfig;
pub use logging::{FileLogFormat, FileLoggingConfig};
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("database.pool_size cannot be 0")]
    InvalidPoolSize,

    #[error("database.path cannot be empty")]
    EmptyDatabasePath,

    #[error("logging.filter cannot be empty")]
    EmptyLogFilter,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// SQLite store settings
    pub database: FileDatabaseConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }
        if self.database.pool_size == 0 {
            return Err(ConfigValidationError::InvalidPoolSize);
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDatabasePath);
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}
