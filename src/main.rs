//! Bookshelf backend - GraphQL catalog service
//!
//! All operations are exposed via GraphQL at /graphql.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::app::{build_app, AppState};
use bookshelf::config::Config;
use bookshelf::db::{seed, Database};
use bookshelf::graphql::build_schema;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookshelf backend");

    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;
    tracing::info!("Database ready");

    // Seed runs to completion before any query traffic is accepted
    seed::run(&db).await?;

    let schema = build_schema(db.clone());
    let state = AppState {
        config: config.clone(),
        db,
        schema,
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("GraphiQL available at http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, build_app(state)).await?;

    Ok(())
}
