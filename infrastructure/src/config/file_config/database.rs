//! Store configuration from TOML (`[database]` section)

use serde::{Deserialize, Serialize};

/// Raw database configuration from TOML
///
/// # Example
///
/// ```toml
/// [database]
/// path = "trivia.db"
/// pool_size = 8
/// seed = true        # load the sample questions into an empty store
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    /// SQLite database file
    pub path: String,
    /// Maximum pooled connections
    pub pool_size: u32,
    /// Load sample data when the questions table is empty
    pub seed: bool,
}

impl Default for FileDatabaseConfig {
    fn default() -> Self {
        Self {
            path: "trivia.db".to_string(),
            pool_size: 8,
            seed: false,
        }
    }
}
