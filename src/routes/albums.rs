use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    metrics::Metrics,
    state::AppState,
    types::{Album, NewAlbum},
};

fn record_failure(metrics: &Metrics, err: sqlx::Error) -> AppError {
    let err = AppError::from(err);
    if err.is_server_side() {
        metrics.inc_storage_errors();
    }
    err
}

pub async fn list_albums(State(state): State<AppState>) -> AppResult<Json<Vec<Album>>> {
    let albums = state.albums.list().await.map_err(|e| record_failure(&state.metrics, e))?;
    state.metrics.inc_listed();
    Ok(Json(albums))
}

pub async fn create_album(
    State(state): State<AppState>,
    body: Result<Json<NewAlbum>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Album>)> {
    let Json(new_album) = body?;

    let id = state.albums.insert(&new_album).await.map_err(|e| record_failure(&state.metrics, e))?;
    tracing::debug!(id, "album inserted");

    // Re-read so the response reflects what the database actually stored.
    let album = state.albums.get(id).await.map_err(|e| match e {
        sqlx::Error::RowNotFound => {
            state.metrics.inc_storage_errors();
            AppError::Internal(anyhow::anyhow!("album {} vanished right after insert", id))
        }
        e => record_failure(&state.metrics, e),
    })?;

    state.metrics.inc_created();
    Ok((StatusCode::CREATED, Json(album)))
}

pub async fn get_album(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Album>> {
    let Path(id) = id?;

    let album = state.albums.get(id).await.map_err(|e| match e {
        sqlx::Error::RowNotFound => {
            state.metrics.inc_not_found();
            AppError::NotFound(format!("Album {} not found", id))
        }
        e => record_failure(&state.metrics, e),
    })?;

    state.metrics.inc_fetched();
    Ok(Json(album))
}
