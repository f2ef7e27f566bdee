/// Playlist song list API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use cadence_core::{
    models::{
        AddSongToPlaylistRequest, AddSongToPlaylistResult, GetPlaylistSongsRequest,
        GetPlaylistSongsResult,
    },
    PlaylistId, SongOrder,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongBody {
    pub asin: String,
    pub track_number: i32,
    #[serde(default)]
    pub queue_next: bool,
}

/// POST /api/playlists/:id/songs
/// Add a catalog track to the playlist, at the front when `queueNext` is set
pub async fn add_song_to_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<AddSongBody>, JsonRejection>,
) -> Result<Json<AddSongToPlaylistResult>> {
    let Json(body) = body.map_err(|e| ServerError::invalid_request(e.body_text()))?;

    let result = app_state
        .add_song_to_playlist
        .handle_request(AddSongToPlaylistRequest {
            id: PlaylistId::new(id),
            asin: body.asin,
            track_number: body.track_number,
            queue_next: body.queue_next,
        })
        .await?;
    Ok(Json(result))
}

/// GET /api/playlists/:id/songs?order=DEFAULT
/// Get the playlist's songs; an omitted `order` means DEFAULT
///
/// The first `order` pair wins; repeats are ignored.
pub async fn get_playlist_songs(
    Path(id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    State(app_state): State<AppState>,
) -> Result<Json<GetPlaylistSongsResult>> {
    let order = params
        .into_iter()
        .find(|(key, _)| key == "order")
        .map(|(_, value)| SongOrder::from(value))
        .unwrap_or_default();

    let result = app_state
        .get_playlist_songs
        .handle_request(GetPlaylistSongsRequest {
            id: PlaylistId::new(id),
            order,
        })
        .await?;
    Ok(Json(result))
}
