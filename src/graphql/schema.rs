//! GraphQL schema definition
//!
//! This is the single API surface for the catalog: a fixed set of named
//! read-only queries, no mutations or subscriptions.

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::queries::BookQueries;

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookQueries);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(db: Database) -> BookshelfSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(db)
        .finish()
}
