//! Sample trivia data for development and tests.

/// Number of categories in [`SEED_SQL`].
pub const SAMPLE_CATEGORY_COUNT: usize = 6;

/// Number of questions in [`SEED_SQL`].
pub const SAMPLE_QUESTION_COUNT: usize = 19;

pub(super) const SEED_SQL: &str = include_str!("seed.sql");
