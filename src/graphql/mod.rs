//! GraphQL API for the book/author catalog
//!
//! Queries are split by domain into structs with `#[Object]` impls, merged
//! into the QueryRoot with `#[derive(MergedObject)]`. Cursor handling for the
//! windowed queries lives in [pagination].

pub mod helpers;
pub mod pagination;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{build_schema, BookshelfSchema, QueryRoot};
