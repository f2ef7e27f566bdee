/// UpdatePlaylist operation
use crate::converter;
use crate::dao::PlaylistDao;
use crate::error::{InvalidAttributeError, Result};
use crate::models::{UpdatePlaylistRequest, UpdatePlaylistResult};
use crate::validation::validate_attribute;

/// Renames a playlist. The owner cannot be changed.
#[derive(Clone)]
pub struct UpdatePlaylistActivity {
    playlist_dao: PlaylistDao,
}

impl UpdatePlaylistActivity {
    pub fn new(playlist_dao: PlaylistDao) -> Self {
        Self { playlist_dao }
    }

    pub async fn handle_request(
        &self,
        request: UpdatePlaylistRequest,
    ) -> Result<UpdatePlaylistResult> {
        tracing::info!(?request, "Received UpdatePlaylistRequest");

        validate_attribute("Playlist name", &request.name)?;

        let mut playlist = self.playlist_dao.get_playlist(&request.id).await?;

        if playlist.customer_id != request.customer_id {
            return Err(InvalidAttributeError::Change(format!(
                "Customer ID of playlist {} cannot be changed",
                playlist.id
            ))
            .into());
        }

        playlist.name = request.name;
        let saved = self.playlist_dao.save_playlist(playlist).await?;

        Ok(UpdatePlaylistResult {
            playlist: converter::to_playlist_detail_model(&saved),
        })
    }
}
