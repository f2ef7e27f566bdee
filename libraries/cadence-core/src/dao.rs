//! Typed access to the stores
//!
//! The DAOs wrap the raw store traits and give every lookup a not-found arm,
//! so activities can use `?` and never see an `Option`.

use crate::error::{CadenceError, Result};
use crate::storage::{AlbumTrackStore, PlaylistStore};
use crate::types::{AlbumTrack, Playlist, PlaylistId};
use std::sync::Arc;

/// Loads and saves whole playlists
#[derive(Clone)]
pub struct PlaylistDao {
    store: Arc<dyn PlaylistStore>,
}

impl PlaylistDao {
    pub fn new(store: Arc<dyn PlaylistStore>) -> Self {
        Self { store }
    }

    /// Load a playlist, failing with `PlaylistNotFound` if it does not exist
    pub async fn get_playlist(&self, id: &PlaylistId) -> Result<Playlist> {
        self.store
            .get_playlist(id.clone())
            .await?
            .ok_or_else(|| CadenceError::PlaylistNotFound(id.clone()))
    }

    /// Overwrite the stored playlist. The returned value is what was persisted.
    pub async fn save_playlist(&self, playlist: Playlist) -> Result<Playlist> {
        tracing::debug!(playlist_id = %playlist.id, songs = playlist.song_count, "Saving playlist");
        self.store.save_playlist(playlist).await
    }
}

/// Resolves catalog tracks
#[derive(Clone)]
pub struct AlbumTrackDao {
    store: Arc<dyn AlbumTrackStore>,
}

impl AlbumTrackDao {
    pub fn new(store: Arc<dyn AlbumTrackStore>) -> Self {
        Self { store }
    }

    /// Look up a track, failing with `AlbumTrackNotFound` for any key not in the catalog
    pub async fn get_album_track(&self, asin: &str, track_number: i32) -> Result<AlbumTrack> {
        self.store
            .get_album_track(asin, track_number)
            .await?
            .ok_or_else(|| CadenceError::album_track_not_found(asin, track_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MockAlbumTrackStore, MockPlaylistStore};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn missing_playlist_becomes_not_found() {
        let mut store = MockPlaylistStore::new();
        store
            .expect_get_playlist()
            .with(eq(PlaylistId::new("nope")))
            .times(1)
            .returning(|_| Ok(None));

        let dao = PlaylistDao::new(Arc::new(store));
        let err = dao.get_playlist(&PlaylistId::new("nope")).await.unwrap_err();

        assert!(matches!(err, CadenceError::PlaylistNotFound(id) if id.as_str() == "nope"));
    }

    #[tokio::test]
    async fn store_failures_pass_through_unchanged() {
        let mut store = MockPlaylistStore::new();
        store
            .expect_get_playlist()
            .returning(|_| Err(CadenceError::storage("connection reset")));

        let dao = PlaylistDao::new(Arc::new(store));
        let err = dao.get_playlist(&PlaylistId::new("p1")).await.unwrap_err();

        assert!(matches!(err, CadenceError::Storage(_)));
    }

    #[tokio::test]
    async fn negative_track_number_is_just_not_found() {
        let mut store = MockAlbumTrackStore::new();
        store
            .expect_get_album_track()
            .with(eq("nonexistent asin"), eq(-1))
            .times(1)
            .returning(|_, _| Ok(None));

        let dao = AlbumTrackDao::new(Arc::new(store));
        let err = dao
            .get_album_track("nonexistent asin", -1)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CadenceError::AlbumTrackNotFound { ref asin, track_number: -1 } if asin == "nonexistent asin"
        ));
    }

    #[tokio::test]
    async fn found_track_is_returned() {
        let track = AlbumTrack::new("B1", 2).with_song_title("Two");
        let expected = track.clone();

        let mut store = MockAlbumTrackStore::new();
        store
            .expect_get_album_track()
            .returning(move |_, _| Ok(Some(track.clone())));

        let dao = AlbumTrackDao::new(Arc::new(store));
        assert_eq!(dao.get_album_track("B1", 2).await.unwrap(), expected);
    }
}
