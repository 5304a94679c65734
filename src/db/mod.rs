//! Database connection and repositories

pub mod authors;
pub mod books;
pub mod seed;

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub use authors::{AuthorRecord, AuthorRepository};
pub use books::{BookRecord, BookRepository, WINDOW_SIZE};

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the maximum connection pool size from environment or default
    fn get_max_connections(url: &str) -> u32 {
        // An in-memory SQLite database is private to its connection, so the
        // pool must stay at a single connection or queries would see
        // different (empty) databases.
        if url.contains(":memory:") {
            return 1;
        }

        std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }

    /// Create a new database connection pool
    pub async fn connect(url: &str) -> Result<Self> {
        let max_connections = Self::get_max_connections(url);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        Ok(Self { pool })
    }

    /// Create the catalog tables if they do not exist yet
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS authors (
                id          TEXT PRIMARY KEY,
                first_name  TEXT NOT NULL,
                last_name   TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id                TEXT PRIMARY KEY,
                title             TEXT NOT NULL,
                isbn10            TEXT NOT NULL,
                publication_date  DATE NOT NULL,
                author_id         TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Keyset scrolling by publication date walks this index
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_books_publication_date \
             ON books (publication_date, id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get the author repository
    pub fn authors(&self) -> AuthorRepository {
        AuthorRepository::new(self.pool.clone())
    }

    /// Get the book repository
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.pool.clone())
    }
}
