//! Book database repository
//!
//! Finder operations come in three access modes: full list, offset paging
//! (with total count) and keyset-windowed scrolling. Windowed finders resume
//! strictly after a [ScrollPosition] and fetch one row beyond the window size
//! to learn whether a further page exists.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Fixed number of rows per window
pub const WINDOW_SIZE: i64 = 5;

/// Book record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub isbn10: String,
    pub publication_date: NaiveDate,
    pub author_id: String,
}

/// Marker identifying the last row seen by a windowed query, so a subsequent
/// query can resume strictly after it.
///
/// Each variant is tied to the sort order it was produced under. A windowed
/// finder only accepts the variant matching its own order; handing it a
/// position issued under a different order is rejected rather than silently
/// returning rows from the wrong place.
///
/// The initial marker ("start of set") is the absence of a position
/// (`Option::None` at the call sites), never a variant of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub enum ScrollPosition {
    /// Resume after the book with this id, in natural key order
    ById { id: String },
    /// Resume after `(publication_date, id)`, in publication-date order with
    /// the id as tie-break
    ByPublicationDate {
        publication_date: NaiveDate,
        id: String,
    },
}

impl ScrollPosition {
    /// Position after `record` in natural key order
    pub fn after_id(record: &BookRecord) -> Self {
        Self::ById {
            id: record.id.clone(),
        }
    }

    /// Position after `record` in publication-date order
    pub fn after_publication_date(record: &BookRecord) -> Self {
        Self::ByPublicationDate {
            publication_date: record.publication_date,
            id: record.id.clone(),
        }
    }
}

/// Repository for book operations
#[derive(Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

const BOOK_COLUMNS: &str = "id, title, isbn10, publication_date, author_id";

impl BookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a book by id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<BookRecord>> {
        let record = sqlx::query_as::<_, BookRecord>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Get all books in natural key order (unbounded; fine for a demo
    /// catalog, not for a real one)
    pub async fn list_all(&self) -> Result<Vec<BookRecord>> {
        let records = sqlx::query_as::<_, BookRecord>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get all books whose title contains the given substring, matching
    /// semantics delegated to SQLite's `LIKE`
    pub async fn list_by_title_contains(&self, title: &str) -> Result<Vec<BookRecord>> {
        let records = sqlx::query_as::<_, BookRecord>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books \
             WHERE title LIKE '%' || ? || '%' ORDER BY id"
        ))
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Offset paging: skip `page * size` rows, take `size` rows, optionally
    /// filtered by title substring.
    ///
    /// Returns (records, total_count)
    pub async fn page(
        &self,
        title: Option<&str>,
        page: i64,
        size: i64,
    ) -> Result<(Vec<BookRecord>, i64)> {
        let (records, total) = match title {
            Some(title) => {
                let records = sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books \
                     WHERE title LIKE '%' || ? || '%' \
                     ORDER BY id LIMIT ? OFFSET ?"
                ))
                .bind(title)
                .bind(size)
                .bind(page * size)
                .fetch_all(&self.pool)
                .await?;

                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM books WHERE title LIKE '%' || ? || '%'",
                )
                .bind(title)
                .fetch_one(&self.pool)
                .await?;

                (records, total)
            }
            None => {
                let records = sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books ORDER BY id LIMIT ? OFFSET ?"
                ))
                .bind(size)
                .bind(page * size)
                .fetch_all(&self.pool)
                .await?;

                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
                    .fetch_one(&self.pool)
                    .await?;

                (records, total)
            }
        };

        Ok((records, total))
    }

    /// Windowed scroll in natural key order.
    ///
    /// Returns (records, has_next)
    pub async fn window_by_id(
        &self,
        after: Option<&ScrollPosition>,
    ) -> Result<(Vec<BookRecord>, bool)> {
        let records = match after {
            None => {
                sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books ORDER BY id LIMIT ?"
                ))
                .bind(WINDOW_SIZE + 1)
                .fetch_all(&self.pool)
                .await?
            }
            Some(ScrollPosition::ById { id }) => {
                sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books WHERE id > ? ORDER BY id LIMIT ?"
                ))
                .bind(id)
                .bind(WINDOW_SIZE + 1)
                .fetch_all(&self.pool)
                .await?
            }
            Some(other) => bail!("scroll position {other:?} was issued for a different ordering"),
        };

        Ok(Self::cut_window(records))
    }

    /// Windowed scroll in natural key order, filtered by title substring.
    ///
    /// Returns (records, has_next)
    pub async fn window_by_id_title_contains(
        &self,
        title: &str,
        after: Option<&ScrollPosition>,
    ) -> Result<(Vec<BookRecord>, bool)> {
        let records = match after {
            None => {
                sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books \
                     WHERE title LIKE '%' || ? || '%' ORDER BY id LIMIT ?"
                ))
                .bind(title)
                .bind(WINDOW_SIZE + 1)
                .fetch_all(&self.pool)
                .await?
            }
            Some(ScrollPosition::ById { id }) => {
                sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books \
                     WHERE title LIKE '%' || ? || '%' AND id > ? ORDER BY id LIMIT ?"
                ))
                .bind(title)
                .bind(id)
                .bind(WINDOW_SIZE + 1)
                .fetch_all(&self.pool)
                .await?
            }
            Some(other) => bail!("scroll position {other:?} was issued for a different ordering"),
        };

        Ok(Self::cut_window(records))
    }

    /// Windowed scroll in publication-date order, id as tie-break.
    ///
    /// Returns (records, has_next)
    pub async fn window_by_publication_date(
        &self,
        after: Option<&ScrollPosition>,
    ) -> Result<(Vec<BookRecord>, bool)> {
        let records = match after {
            None => {
                sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books \
                     ORDER BY publication_date, id LIMIT ?"
                ))
                .bind(WINDOW_SIZE + 1)
                .fetch_all(&self.pool)
                .await?
            }
            Some(ScrollPosition::ByPublicationDate {
                publication_date,
                id,
            }) => {
                sqlx::query_as::<_, BookRecord>(&format!(
                    "SELECT {BOOK_COLUMNS} FROM books \
                     WHERE publication_date > ?1 OR (publication_date = ?1 AND id > ?2) \
                     ORDER BY publication_date, id LIMIT ?3"
                ))
                .bind(publication_date)
                .bind(id)
                .bind(WINDOW_SIZE + 1)
                .fetch_all(&self.pool)
                .await?
            }
            Some(other) => bail!("scroll position {other:?} was issued for a different ordering"),
        };

        Ok(Self::cut_window(records))
    }

    /// Insert a book, keeping an existing row on id conflict (seed path)
    pub async fn insert(&self, record: &BookRecord) -> Result<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO books (id, title, isbn10, publication_date, author_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(&record.isbn10)
        .bind(record.publication_date)
        .bind(&record.author_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Truncate an over-fetched result to the window size; the extra row only
    /// tells us a further page exists.
    fn cut_window(mut records: Vec<BookRecord>) -> (Vec<BookRecord>, bool) {
        let has_next = records.len() as i64 > WINDOW_SIZE;
        records.truncate(WINDOW_SIZE as usize);
        (records, has_next)
    }
}
