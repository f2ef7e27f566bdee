/// AddSongToPlaylist operation
use crate::converter;
use crate::dao::{AlbumTrackDao, PlaylistDao};
use crate::error::Result;
use crate::models::{AddSongToPlaylistRequest, AddSongToPlaylistResult};
use crate::types::InsertPosition;

/// Adds a catalog track to the head or tail of a playlist's song list.
///
/// The playlist and the track are both resolved before anything is written,
/// so a failed lookup never leaves a partial save behind. Concurrent calls on
/// the same playlist are not coordinated; the later save wins.
#[derive(Clone)]
pub struct AddSongToPlaylistActivity {
    playlist_dao: PlaylistDao,
    album_track_dao: AlbumTrackDao,
}

impl AddSongToPlaylistActivity {
    pub fn new(playlist_dao: PlaylistDao, album_track_dao: AlbumTrackDao) -> Self {
        Self {
            playlist_dao,
            album_track_dao,
        }
    }

    /// Returns the playlist's full song list after the insert
    pub async fn handle_request(
        &self,
        request: AddSongToPlaylistRequest,
    ) -> Result<AddSongToPlaylistResult> {
        tracing::info!(?request, "Received AddSongToPlaylistRequest");

        let mut playlist = self.playlist_dao.get_playlist(&request.id).await?;
        let album_track = self
            .album_track_dao
            .get_album_track(&request.asin, request.track_number)
            .await?;

        playlist.add_song(album_track, InsertPosition::from_queue_next(request.queue_next));

        let saved = self.playlist_dao.save_playlist(playlist).await?;

        Ok(AddSongToPlaylistResult {
            songs: converter::to_song_model_list(saved.songs()),
        })
    }
}
