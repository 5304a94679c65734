use tracing::debug;

use super::prelude::*;

/// Largest accepted page size for offset paging
const MAX_PAGE_SIZE: i64 = 100;

/// Check offset-paging arguments before the store is queried
fn validate_page_args(page: i32, size: i32) -> Result<(i64, i64)> {
    if page < 0 {
        return Err(Error::new("page must not be negative"));
    }
    if size <= 0 {
        return Err(Error::new("size must be positive"));
    }
    Ok((page as i64, (size as i64).min(MAX_PAGE_SIZE)))
}

/// Treat an absent or empty cursor as the start of the set; anything else
/// must decode, and a malformed token fails the query before the store is
/// touched.
fn decode_optional_cursor(cursor: Option<&str>) -> Result<Option<ScrollPosition>> {
    match cursor {
        None => Ok(None),
        Some(c) if c.is_empty() => Ok(None),
        Some(c) => decode_cursor(c)
            .map(Some)
            .map_err(|e| Error::new(e.to_string())),
    }
}

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Look up a single book by its id
    async fn book_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Book> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .books()
            .get_by_id(&id)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        match record {
            Some(r) => Ok(book_record_to_graphql(r)),
            None => Err(Error::new(format!("Book not found: {id}"))),
        }
    }

    /// Get all books (unbounded; demo only)
    async fn all_books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .books()
            .list_all()
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(records.into_iter().map(book_record_to_graphql).collect())
    }

    /// Page through all books with offset/limit paging
    async fn all_books_paged(&self, ctx: &Context<'_>, page: i32, size: i32) -> Result<BookPage> {
        let db = ctx.data_unchecked::<Database>();
        let (page_num, page_size) = validate_page_args(page, size)?;

        let (records, total) = db
            .books()
            .page(None, page_num, page_size)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(BookPage {
            items: records.into_iter().map(book_record_to_graphql).collect(),
            page,
            size: page_size as i32,
            total_count: total,
        })
    }

    /// Get all books whose title contains the given substring
    async fn books_by_title(&self, ctx: &Context<'_>, title: String) -> Result<Vec<Book>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .books()
            .list_by_title_contains(&title)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(records.into_iter().map(book_record_to_graphql).collect())
    }

    /// Page through books with matching title using offset/limit paging
    async fn books_by_title_paged(
        &self,
        ctx: &Context<'_>,
        title: String,
        page: i32,
        size: i32,
    ) -> Result<BookPage> {
        let db = ctx.data_unchecked::<Database>();
        let (page_num, page_size) = validate_page_args(page, size)?;

        let (records, total) = db
            .books()
            .page(Some(&title), page_num, page_size)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(BookPage {
            items: records.into_iter().map(book_record_to_graphql).collect(),
            page,
            size: page_size as i32,
            total_count: total,
        })
    }

    /// Scroll through all books in natural key order
    async fn all_books_windowed(
        &self,
        ctx: &Context<'_>,
        cursor: Option<String>,
    ) -> Result<BookWindow> {
        let db = ctx.data_unchecked::<Database>();
        let after = decode_optional_cursor(cursor.as_deref())?;
        debug!(?after, "windowed scroll over all books");

        let (records, has_next) = db
            .books()
            .window_by_id(after.as_ref())
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(window_from_records(
            records,
            has_next,
            ScrollPosition::after_id,
        ))
    }

    /// Scroll through books with matching title in natural key order
    async fn books_by_title_windowed(
        &self,
        ctx: &Context<'_>,
        title: String,
        cursor: Option<String>,
    ) -> Result<BookWindow> {
        let db = ctx.data_unchecked::<Database>();
        let after = decode_optional_cursor(cursor.as_deref())?;
        debug!(?after, title, "windowed scroll over title matches");

        let (records, has_next) = db
            .books()
            .window_by_id_title_contains(&title, after.as_ref())
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(window_from_records(
            records,
            has_next,
            ScrollPosition::after_id,
        ))
    }

    /// Scroll through all books in publication-date order
    async fn books_ordered_by_date(
        &self,
        ctx: &Context<'_>,
        cursor: Option<String>,
    ) -> Result<BookWindow> {
        let db = ctx.data_unchecked::<Database>();
        let after = decode_optional_cursor(cursor.as_deref())?;
        debug!(?after, "windowed scroll in publication-date order");

        let (records, has_next) = db
            .books()
            .window_by_publication_date(after.as_ref())
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(window_from_records(
            records,
            has_next,
            ScrollPosition::after_publication_date,
        ))
    }
}
