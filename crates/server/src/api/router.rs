use axum::{
    routing::{get, post},
    Router,
};

use crate::infra::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/metadata/crawl", post(handlers::crawl_movies))
        .route("/api/metadata/{id}", get(handlers::get_metadata))
        .with_state(state)
}
