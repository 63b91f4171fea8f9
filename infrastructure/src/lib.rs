//! Infrastructure layer for trivia-api
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the SQLite trivia store and configuration
//! file loading.

pub mod config;
pub mod sqlite;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDatabaseConfig, FileLogFormat,
    FileLoggingConfig, FileServerConfig,
};
pub use sqlite::{
    SAMPLE_CATEGORY_COUNT, SAMPLE_QUESTION_COUNT, SqlitePool, SqliteStoreError,
    SqliteTriviaStore,
};
