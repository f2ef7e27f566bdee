/// GetPlaylistSongs operation
use crate::converter;
use crate::dao::PlaylistDao;
use crate::error::Result;
use crate::models::{GetPlaylistSongsRequest, GetPlaylistSongsResult, SongModel};
use crate::types::{AlbumTrack, SongOrder};

/// Returns a playlist's songs
#[derive(Clone)]
pub struct GetPlaylistSongsActivity {
    playlist_dao: PlaylistDao,
}

impl GetPlaylistSongsActivity {
    pub fn new(playlist_dao: PlaylistDao) -> Self {
        Self { playlist_dao }
    }

    pub async fn handle_request(
        &self,
        request: GetPlaylistSongsRequest,
    ) -> Result<GetPlaylistSongsResult> {
        tracing::info!(?request, "Received GetPlaylistSongsRequest");

        let playlist = self.playlist_dao.get_playlist(&request.id).await?;

        Ok(GetPlaylistSongsResult {
            songs: ordered_songs(playlist.songs(), &request.order),
        })
    }
}

fn ordered_songs(songs: &[AlbumTrack], order: &SongOrder) -> Vec<SongModel> {
    match order {
        SongOrder::Default => converter::to_song_model_list(songs),
        SongOrder::Unrecognized(value) => {
            tracing::debug!(order = %value, "Unrecognized song order, using stored order");
            converter::to_song_model_list(songs)
        }
    }
}
