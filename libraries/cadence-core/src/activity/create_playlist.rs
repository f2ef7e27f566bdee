/// CreatePlaylist operation
use crate::converter;
use crate::dao::PlaylistDao;
use crate::error::Result;
use crate::models::{CreatePlaylistRequest, CreatePlaylistResult};
use crate::types::Playlist;
use crate::validation::validate_attribute;

/// Creates an empty playlist under a freshly generated ID
#[derive(Clone)]
pub struct CreatePlaylistActivity {
    playlist_dao: PlaylistDao,
}

impl CreatePlaylistActivity {
    pub fn new(playlist_dao: PlaylistDao) -> Self {
        Self { playlist_dao }
    }

    pub async fn handle_request(
        &self,
        request: CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResult> {
        tracing::info!(?request, "Received CreatePlaylistRequest");

        validate_attribute("Playlist name", &request.name)?;
        validate_attribute("Customer ID", &request.customer_id)?;

        let playlist = Playlist::new(request.name, request.customer_id)
            .with_tags(request.tags.unwrap_or_default());

        let saved = self.playlist_dao.save_playlist(playlist).await?;
        tracing::info!(playlist_id = %saved.id, "Created playlist");

        Ok(CreatePlaylistResult {
            playlist: converter::to_playlist_model(&saved),
        })
    }
}
