pub mod books;

pub use books::BookQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Error, Object, Result};

    pub(crate) use crate::db::books::ScrollPosition;
    pub(crate) use crate::db::Database;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::pagination::decode_cursor;
    pub(crate) use crate::graphql::types::*;
}
