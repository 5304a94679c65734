// Helper functions shared across GraphQL query modules.

use crate::db::books::ScrollPosition;
use crate::db::BookRecord;
use crate::graphql::pagination::{encode_cursor, WindowPageInfo};
use crate::graphql::types::{Book, BookWindow};

/// Convert a BookRecord from the database to a GraphQL Book type
pub(crate) fn book_record_to_graphql(r: BookRecord) -> Book {
    Book {
        id: r.id,
        title: r.title,
        isbn10: r.isbn10,
        publication_date: r.publication_date,
        author_id: r.author_id,
    }
}

/// Build a window response from a repository result.
///
/// The end cursor encodes the position of the last returned row under the
/// same order the query ran with, supplied by `position_of`.
pub(crate) fn window_from_records(
    records: Vec<BookRecord>,
    has_next: bool,
    position_of: impl Fn(&BookRecord) -> ScrollPosition,
) -> BookWindow {
    let end_cursor = records.last().map(|r| encode_cursor(&position_of(r)));

    BookWindow {
        items: records.into_iter().map(book_record_to_graphql).collect(),
        page_info: WindowPageInfo {
            end_cursor,
            has_next_page: has_next,
        },
    }
}
