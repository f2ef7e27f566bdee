//! Record to API model conversion
//!
//! Pure and infallible. Absent optional fields become empty values.

use crate::models::{PlaylistDetailModel, PlaylistModel, SongModel};
use crate::types::{AlbumTrack, Playlist};

/// Project a playlist down to its ID
pub fn to_playlist_model(playlist: &Playlist) -> PlaylistModel {
    PlaylistModel {
        id: playlist.id.to_string(),
    }
}

/// Project a playlist with its descriptive fields
pub fn to_playlist_detail_model(playlist: &Playlist) -> PlaylistDetailModel {
    PlaylistDetailModel {
        id: playlist.id.to_string(),
        name: playlist.name.clone(),
        customer_id: playlist.customer_id.clone(),
        song_count: playlist.song_count,
        tags: playlist
            .tags
            .as_ref()
            .map(|tags| tags.iter().cloned().collect())
            .unwrap_or_default(),
    }
}

pub fn to_song_model(album_track: &AlbumTrack) -> SongModel {
    SongModel {
        asin: album_track.asin.clone(),
        track_number: album_track.track_number,
        album_name: album_track.album_name.clone().unwrap_or_default(),
        song_title: album_track.song_title.clone().unwrap_or_default(),
    }
}

/// Convert a song list, keeping its order
pub fn to_song_model_list(songs: &[AlbumTrack]) -> Vec<SongModel> {
    songs.iter().map(to_song_model).collect()
}
