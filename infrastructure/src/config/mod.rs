//! Configuration file loading for trivia-api
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIVIA_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./trivia.toml` or `./.trivia.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/trivia-api/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDatabaseConfig, FileLogFormat, FileLoggingConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
