//! Author database repository

use anyhow::Result;
use sqlx::SqlitePool;

/// Author record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthorRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Repository for author operations
#[derive(Clone)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an author by id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<AuthorRecord>> {
        let record = sqlx::query_as::<_, AuthorRecord>(
            "SELECT id, first_name, last_name FROM authors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert an author, keeping an existing row on id conflict (seed path)
    pub async fn insert(&self, record: &AuthorRecord) -> Result<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO authors (id, first_name, last_name) VALUES (?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
