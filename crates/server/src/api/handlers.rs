use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{error, info};

use crate::infra::{AppError, AppResult, AppState};
use crate::models::{CrawlAccepted, CrawlRequest, MetadataResponse};
use crate::repositories::MetadataRepository;

/// Accept a batch of crawl requests and run them in the background.
///
/// Titles that already have a stored record are skipped unless the
/// request asks for a refresh. Returns 202 immediately; results are
/// announced through the notifier.
pub async fn crawl_movies(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CrawlRequest>>,
) -> AppResult<(StatusCode, Json<CrawlAccepted>)> {
    if requests.is_empty() {
        return Err(AppError::BadRequest("empty crawl batch".to_string()));
    }

    let mut accepted = 0;
    for request in requests {
        if !request.refresh
            && MetadataRepository::title_exists(&state.infra.db, &request.title).await?
        {
            info!(title = %request.title, "Skipping crawl, metadata already stored");
            continue;
        }

        accepted += 1;
        let crawl = state.services.crawl.clone();
        tokio::spawn(async move {
            if let Err(e) = crawl.crawl(&request).await {
                error!(title = %request.title, "Crawl failed: {}", e);
            }
        });
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(CrawlAccepted {
            message: format!("{} crawl(s) accepted", accepted),
            status: "FETCHING".to_string(),
            requested_at: Utc::now(),
        }),
    ))
}

/// Fetch one stored metadata record with its cast
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MetadataResponse>> {
    let entity = MetadataRepository::get_by_id(&state.infra.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("metadata {} not found", id)))?;

    let actors = MetadataRepository::actors_for(&state.infra.db, entity.id).await?;

    Ok(Json(MetadataResponse::from_entity(
        entity,
        actors,
        &state.services.languages,
    )))
}
