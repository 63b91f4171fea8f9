//! Pooled SQLite implementation of the trivia store.

use super::schema::SCHEMA_SQL;
use super::seed::SEED_SQL;
use async_trait::async_trait;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use trivia_application::{StoreError, TriviaStore};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

pub type SqlitePool = Pool<SqliteConnectionManager>;

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

/// Errors raised while opening or preparing the database
#[derive(Error, Debug)]
pub enum SqliteStoreError {
    #[error("Could not create database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Trivia store backed by a SQLite database file.
#[derive(Clone)]
pub struct SqliteTriviaStore {
    pool: SqlitePool,
}

impl SqliteTriviaStore {
    /// Open (or create) the database at `path` with up to `pool_size`
    /// pooled connections.
    pub fn open(path: impl AsRef<Path>, pool_size: u32) -> Result<Self, SqliteStoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(path).with_init(|c| {
            c.pragma_update(None, "journal_mode", "WAL")?;
            c.pragma_update(None, "synchronous", "NORMAL")?;
            c.pragma_update(None, "busy_timeout", 3000i64)?;
            c.pragma_update(None, "foreign_keys", "OFF")?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(pool_size)
            .connection_timeout(Duration::from_secs(10))
            .build(manager)?;

        info!("Opened SQLite store at {}", path.display());
        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// limited to a single connection that is never recycled.
    pub fn in_memory() -> Result<Self, SqliteStoreError> {
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(SqliteConnectionManager::memory())?;
        Ok(Self { pool })
    }

    /// Create the tables if they do not exist yet.
    pub fn ensure_schema(&self) -> Result<(), SqliteStoreError> {
        let conn = self.pool.get()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Load the sample categories and questions into an empty store.
    ///
    /// Returns the number of questions inserted, which is 0 when the store
    /// already holds questions.
    pub fn seed_sample_data(&self) -> Result<usize, SqliteStoreError> {
        let mut conn = self.pool.get()?;
        let existing: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))?;
        if existing > 0 {
            debug!("Skipping seed: store already holds {} questions", existing);
            return Ok(0);
        }

        let tx = conn.transaction()?;
        tx.execute_batch(SEED_SQL)?;
        let inserted: i64 = tx.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))?;
        tx.commit()?;

        info!("Seeded store with {} sample questions", inserted);
        Ok(inserted as usize)
    }

    /// Run `f` on a pooled connection off the async runtime.
    ///
    /// Query errors are wrapped with `on_error`, so reads and writes report
    /// different [`StoreError`] variants.
    async fn run<T, F>(&self, on_error: fn(String) -> StoreError, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            f(&mut conn).map_err(|e| on_error(e.to_string()))
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("store task failed: {e}")))?;

        if let Err(e) = &result {
            warn!("Store operation failed: {}", e);
        }
        result
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: QuestionId::new(row.get(0)?),
        question: row.get(1)?,
        answer: row.get(2)?,
        difficulty: row.get(3)?,
        category: CategoryId::new(row.get(4)?),
    })
}

fn query_questions(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> rusqlite::Result<Vec<Question>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, question_from_row)?;
    rows.collect()
}

#[async_trait]
impl TriviaStore for SqliteTriviaStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.run(StoreError::Query, |conn| {
            let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok(Category::new(row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?;
            rows.collect()
        })
        .await
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        self.run(StoreError::Query, |conn| {
            query_questions(
                conn,
                &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
                [],
            )
        })
        .await
    }

    async fn count_questions(&self) -> Result<usize, StoreError> {
        self.run(StoreError::Query, |conn| {
            conn.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get::<_, i64>(0))
                .map(|n| n as usize)
        })
        .await
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        self.run(StoreError::Query, move |conn| {
            query_questions(
                conn,
                &format!(
                    "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
                ),
                params![category.value()],
            )
        })
        .await
    }

    /// SQLite's `lower()` only folds ASCII, so matching happens in Rust.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let term = term.to_string();
        self.run(StoreError::Query, move |conn| {
            let all = query_questions(
                conn,
                &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
                [],
            )?;
            Ok(all.into_iter().filter(|q| q.matches_term(&term)).collect())
        })
        .await
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        self.run(StoreError::Query, move |conn| {
            conn.query_row(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
                params![id.value()],
                question_from_row,
            )
            .optional()
        })
        .await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        self.run(StoreError::Write, move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO questions (question, answer, category, difficulty) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    question.question(),
                    question.answer(),
                    question.category().value(),
                    question.difficulty()
                ],
            )?;
            let id = QuestionId::new(tx.last_insert_rowid());
            tx.commit()?;
            Ok(Question::from_new(id, question))
        })
        .await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        self.run(StoreError::Write, move |conn| {
            let tx = conn.transaction()?;
            let removed = tx.execute("DELETE FROM questions WHERE id = ?1", params![id.value()])?;
            tx.commit()?;
            Ok(removed > 0)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::{SAMPLE_CATEGORY_COUNT, SAMPLE_QUESTION_COUNT};

    fn seeded() -> SqliteTriviaStore {
        let store = SqliteTriviaStore::in_memory().unwrap();
        store.ensure_schema().unwrap();
        store.seed_sample_data().unwrap();
        store
    }

    #[test]
    fn test_schema_is_idempotent() {
        let store = SqliteTriviaStore::in_memory().unwrap();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
    }

    #[test]
    fn test_seed_only_fills_empty_store() {
        let store = SqliteTriviaStore::in_memory().unwrap();
        store.ensure_schema().unwrap();
        assert_eq!(store.seed_sample_data().unwrap(), SAMPLE_QUESTION_COUNT);
        assert_eq!(store.seed_sample_data().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_categories_ordered_by_id() {
        let categories = seeded().categories().await.unwrap();
        assert_eq!(categories.len(), SAMPLE_CATEGORY_COUNT);
        assert_eq!(categories[0], Category::new(1, "Science"));
        assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_questions_ordered_by_id() {
        let store = seeded();
        let questions = store.questions().await.unwrap();
        assert_eq!(questions.len(), SAMPLE_QUESTION_COUNT);
        assert_eq!(store.count_questions().await.unwrap(), SAMPLE_QUESTION_COUNT);
        assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(questions[0].id.value(), 2);
    }

    #[tokio::test]
    async fn test_questions_in_category() {
        let store = seeded();
        let geography = store
            .questions_in_category(CategoryId::new(3))
            .await
            .unwrap();
        assert_eq!(
            geography.iter().map(|q| q.id.value()).collect::<Vec<_>>(),
            vec![13, 14, 15]
        );
        assert!(
            store
                .questions_in_category(CategoryId::new(10))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = seeded();
        let hits = store.search_questions("TITLE").await.unwrap();
        assert_eq!(
            hits.iter().map(|q| q.id.value()).collect::<Vec<_>>(),
            vec![5, 6]
        );
        assert!(store.search_questions("red apple").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let store = seeded();
        assert!(store.search_questions("%").await.unwrap().is_empty());
        assert!(store.search_questions("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let store = seeded();
        let new = NewQuestion::try_new(
            "Où se trouve l'École Polytechnique?",
            "Palaiseau",
            CategoryId::new(3),
            3,
        )
        .unwrap();
        let created = store.insert_question(new).await.unwrap();

        assert_eq!(store.search_questions("école").await.unwrap(), vec![created.clone()]);
        assert_eq!(store.search_questions("ÉCOLE POLY").await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = seeded();
        let new = NewQuestion::try_new(
            "What is the capital city of Germany?",
            "Berlin",
            CategoryId::new(3),
            1,
        )
        .unwrap();
        let created = store.insert_question(new).await.unwrap();
        assert_eq!(created.id.value(), 24);

        let found = store.find_question(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_delete_is_permanent_and_ids_are_not_reused() {
        let store = seeded();
        assert!(store.delete_question(QuestionId::new(23)).await.unwrap());
        assert!(store.find_question(QuestionId::new(23)).await.unwrap().is_none());
        assert!(!store.delete_question(QuestionId::new(23)).await.unwrap());

        let new = NewQuestion::try_new("Q?", "A", CategoryId::new(1), 1).unwrap();
        let created = store.insert_question(new).await.unwrap();
        assert_eq!(created.id.value(), 24);
    }

    #[tokio::test]
    async fn test_orphan_category_reference_is_allowed() {
        let store = seeded();
        let new = NewQuestion::try_new("Orphan?", "Yes", CategoryId::new(99), 2).unwrap();
        let created = store.insert_question(new).await.unwrap();
        let orphans = store
            .questions_in_category(CategoryId::new(99))
            .await
            .unwrap();
        assert_eq!(orphans, vec![created]);
    }

    #[tokio::test]
    async fn test_missing_schema_is_a_query_error() {
        let store = SqliteTriviaStore::in_memory().unwrap();
        let err = store.questions().await.unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
    }

    #[tokio::test]
    async fn test_file_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("trivia.db");
        {
            let store = SqliteTriviaStore::open(&path, 2).unwrap();
            store.ensure_schema().unwrap();
            store.seed_sample_data().unwrap();
            store.delete_question(QuestionId::new(2)).await.unwrap();
        }
        let store = SqliteTriviaStore::open(&path, 2).unwrap();
        assert_eq!(
            store.count_questions().await.unwrap(),
            SAMPLE_QUESTION_COUNT - 1
        );
    }
}
