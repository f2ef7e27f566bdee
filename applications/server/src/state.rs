/// Shared application state
use cadence_core::activity::{
    AddSongToPlaylistActivity, CreatePlaylistActivity, GetPlaylistActivity,
    GetPlaylistSongsActivity, UpdatePlaylistActivity,
};
use cadence_core::dao::{AlbumTrackDao, PlaylistDao};
use cadence_core::storage::{AlbumTrackStore, PlaylistStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub add_song_to_playlist: AddSongToPlaylistActivity,
    pub get_playlist_songs: GetPlaylistSongsActivity,
    pub create_playlist: CreatePlaylistActivity,
    pub get_playlist: GetPlaylistActivity,
    pub update_playlist: UpdatePlaylistActivity,
}

impl AppState {
    /// Wire every activity to the given stores
    pub fn new(playlists: Arc<dyn PlaylistStore>, album_tracks: Arc<dyn AlbumTrackStore>) -> Self {
        let playlist_dao = PlaylistDao::new(playlists);
        let album_track_dao = AlbumTrackDao::new(album_tracks);

        Self {
            add_song_to_playlist: AddSongToPlaylistActivity::new(
                playlist_dao.clone(),
                album_track_dao,
            ),
            get_playlist_songs: GetPlaylistSongsActivity::new(playlist_dao.clone()),
            create_playlist: CreatePlaylistActivity::new(playlist_dao.clone()),
            get_playlist: GetPlaylistActivity::new(playlist_dao.clone()),
            update_playlist: UpdatePlaylistActivity::new(playlist_dao),
        }
    }
}
