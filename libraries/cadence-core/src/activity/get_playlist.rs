/// GetPlaylist operation
use crate::converter;
use crate::dao::PlaylistDao;
use crate::error::Result;
use crate::models::{GetPlaylistRequest, GetPlaylistResult};

#[derive(Clone)]
pub struct GetPlaylistActivity {
    playlist_dao: PlaylistDao,
}

impl GetPlaylistActivity {
    pub fn new(playlist_dao: PlaylistDao) -> Self {
        Self { playlist_dao }
    }

    pub async fn handle_request(&self, request: GetPlaylistRequest) -> Result<GetPlaylistResult> {
        tracing::info!(?request, "Received GetPlaylistRequest");

        let playlist = self.playlist_dao.get_playlist(&request.id).await?;

        Ok(GetPlaylistResult {
            playlist: converter::to_playlist_detail_model(&playlist),
        })
    }
}
