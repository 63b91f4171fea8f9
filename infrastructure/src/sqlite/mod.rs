//! SQLite adapter for the [`TriviaStore`](trivia_application::TriviaStore) port.
//!
//! Connections come from an r2d2 pool; each store call checks one out on
//! tokio's blocking pool so request handlers never block the runtime.

mod schema;
mod seed;
mod store;

pub use schema::SCHEMA_SQL;
pub use seed::{SAMPLE_CATEGORY_COUNT, SAMPLE_QUESTION_COUNT};
pub use store::{SqlitePool, SqliteStoreError, SqliteTriviaStore};
