//! Boundary shapes: API models, requests and results
//!
//! These are what crosses the service boundary. They are never persisted;
//! the converter in [`crate::converter`] builds them from stored records.

use crate::types::{PlaylistId, SongOrder};
use serde::{Deserialize, Serialize};

/// Flat projection of a catalog track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongModel {
    pub asin: String,
    pub track_number: i32,
    pub album_name: String,
    pub song_title: String,
}

/// Minimal playlist projection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistModel {
    pub id: String,
}

/// Playlist projection with its descriptive fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetailModel {
    pub id: String,
    pub name: String,
    pub customer_id: String,
    pub song_count: u32,
    pub tags: Vec<String>,
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSongToPlaylistRequest {
    pub id: PlaylistId,
    pub asin: String,
    pub track_number: i32,
    pub queue_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlaylistSongsRequest {
    pub id: PlaylistId,
    pub order: SongOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub customer_id: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlaylistRequest {
    pub id: PlaylistId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlaylistRequest {
    pub id: PlaylistId,
    pub name: String,
    pub customer_id: String,
}

// ============================================================================
// Results
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddSongToPlaylistResult {
    pub songs: Vec<SongModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPlaylistSongsResult {
    pub songs: Vec<SongModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePlaylistResult {
    pub playlist: PlaylistModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPlaylistResult {
    pub playlist: PlaylistDetailModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePlaylistResult {
    pub playlist: PlaylistDetailModel,
}
