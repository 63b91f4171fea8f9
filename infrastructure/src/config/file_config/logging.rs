//! Log output configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileLogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `EnvFilter` directive used when neither `-v` nor `RUST_LOG` is given
    pub filter: String,
    /// Output format
    pub format: FileLogFormat,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: FileLogFormat::Pretty,
        }
    }
}
