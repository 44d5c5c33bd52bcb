#![recursion_limit = "256"]

mod config;
mod data_formats;
mod db_helpers;
mod endpoints;
mod errors;
mod extractors;
mod handlers;
mod models;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use config::Config;
pub use data_formats::*;
pub use errors::RequestError;
use handlers::*;
pub use models::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::{
    net::{SocketAddr, TcpListener},
    str::FromStr,
    sync::Arc,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(config: Config) -> Result<()> {
    let pool = init_db(&config.database_url, config.max_connections).await?;
    let address = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener =
        TcpListener::bind(address).with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!("Listening on {}", address);
    serve(listener, make_router(pool)).await
}

/// Serves `router` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::Server::from_tcp(listener)?
        .serve(router.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(db_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = connect(db_url, max_connections).await?;
    tracing::info!("Running migrations");
    run_migrations(&pool).await?;
    tracing::info!("Migrations completed");
    Ok(pool)
}

/// Opens a pool with foreign keys enforced, creating the database file if needed.
/// Connections are never recycled, so `sqlite::memory:` databases survive idle periods.
pub async fn connect(db_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)
        .with_context(|| format!("Invalid DATABASE_URL {db_url}"))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to connect to the database")?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    Ok(())
}

pub fn make_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/api", get(get_endpoints))
        .route("/api/topics", get(get_topics).post(post_topic))
        .route("/api/articles", get(get_articles).post(post_article))
        .route(
            "/api/articles/:article_id",
            get(get_article).patch(patch_article).delete(delete_article),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_article_comments).post(post_article_comment),
        )
        .route("/api/articles/authors/:author", get(get_articles_by_author))
        .route(
            "/api/comments/:comment_id",
            get(get_comment).patch(patch_comment).delete(delete_comment),
        )
        .route("/api/users", get(get_users))
        .route("/api/users/:username", get(get_user))
        .route("/api/users/:username/comments", get(get_user_comments))
        .fallback(not_found)
        .layer(Extension(Arc::new(pool)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
