/// Playlists API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use cadence_core::{
    models::{
        CreatePlaylistRequest, CreatePlaylistResult, GetPlaylistRequest, GetPlaylistResult,
        UpdatePlaylistRequest, UpdatePlaylistResult,
    },
    PlaylistId,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaylistBody {
    pub name: String,
    pub customer_id: String,
}

/// POST /api/playlists
/// Create a new, empty playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<CreatePlaylistRequest>, JsonRejection>,
) -> Result<Json<CreatePlaylistResult>> {
    let Json(request) = body.map_err(|e| ServerError::invalid_request(e.body_text()))?;

    let result = app_state.create_playlist.handle_request(request).await?;
    Ok(Json(result))
}

/// GET /api/playlists/:id
/// Get playlist details
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<GetPlaylistResult>> {
    let result = app_state
        .get_playlist
        .handle_request(GetPlaylistRequest {
            id: PlaylistId::new(id),
        })
        .await?;
    Ok(Json(result))
}

/// PUT /api/playlists/:id
/// Rename a playlist; the owner cannot change
pub async fn update_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<UpdatePlaylistBody>, JsonRejection>,
) -> Result<Json<UpdatePlaylistResult>> {
    let Json(body) = body.map_err(|e| ServerError::invalid_request(e.body_text()))?;

    let result = app_state
        .update_playlist
        .handle_request(UpdatePlaylistRequest {
            id: PlaylistId::new(id),
            name: body.name,
            customer_id: body.customer_id,
        })
        .await?;
    Ok(Json(result))
}
