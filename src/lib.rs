//! Bookshelf - GraphQL book/author catalog
//!
//! Demonstrates three pagination strategies over the same read-only store:
//! offset/limit, page-based and cursor-based windowed (keyset) scrolling.

pub mod app;
pub mod config;
pub mod db;
pub mod graphql;
