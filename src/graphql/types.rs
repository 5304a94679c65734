//! GraphQL type definitions
//!
//! These types mirror the database records but are decorated with
//! async-graphql attributes.

use async_graphql::{ComplexObject, Context, Error, Result, SimpleObject};
use chrono::NaiveDate;

use crate::db::Database;
use crate::graphql::pagination::WindowPageInfo;

/// An author in the catalog
#[derive(Debug, Clone, SimpleObject)]
pub struct Author {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A book in the catalog
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub isbn10: String,
    pub publication_date: NaiveDate,
    /// Resolved through the `author` field instead of being exposed raw
    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Book {
    /// The author this book references.
    ///
    /// A dangling reference fails this field only; sibling books in the same
    /// response still resolve. The nullable return type keeps the error from
    /// propagating past the field.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let db = ctx.data_unchecked::<Database>();
        let record = db
            .authors()
            .get_by_id(&self.author_id)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        match record {
            Some(r) => Ok(Some(Author {
                id: r.id,
                first_name: r.first_name,
                last_name: r.last_name,
            })),
            None => Err(Error::new(format!("Author not found: {}", self.author_id))),
        }
    }
}

/// An offset-based page of books with a total count for UI purposes
#[derive(Debug, Clone, SimpleObject)]
pub struct BookPage {
    pub items: Vec<Book>,
    pub page: i32,
    pub size: i32,
    pub total_count: i64,
}

/// A windowed (keyset) page of books
#[derive(Debug, Clone, SimpleObject)]
pub struct BookWindow {
    pub items: Vec<Book>,
    pub page_info: WindowPageInfo,
}
