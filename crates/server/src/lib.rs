//! Metadata crawl service
//!
//! Ingests crawl requests for movie/series titles, fans out to the
//! configured metadata providers, merges their partial results into one
//! canonical record, persists it with idempotent upsert semantics and
//! publishes a result notification.

pub mod api;
pub mod infra;
pub mod models;
pub mod repositories;
pub mod services;

use std::net::SocketAddr;

pub use api::create_router;
pub use infra::{create_pool, AppError, AppResult, AppState, Config, DatabaseError};

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    /// In-memory database for repository and service tests.
    ///
    /// A single connection keeps the in-memory database alive for the
    /// whole pool lifetime.
    pub async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        pool
    }
}

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Ensure the data directory exists before opening the database
    std::fs::create_dir_all(&config.data_path).map_err(|e| {
        format!(
            "Failed to create data directory '{}': {} (check directory permissions)",
            config.data_path.display(),
            e
        )
    })?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    let state = AppState::new(pool, config);
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
