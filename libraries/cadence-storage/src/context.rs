use crate::{album_tracks, playlists};
use async_trait::async_trait;
use cadence_core::storage::{AlbumTrackStore, PlaylistStore};
use cadence_core::types::{AlbumTrack, Playlist, PlaylistId};
use cadence_core::Result;
use sqlx::SqlitePool;

/// Playlist and catalog store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool at `database_url` and bring its schema up to date
    pub async fn connect(database_url: &str) -> crate::Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Add a track to the catalog; returns `false` if the key already existed
    pub async fn add_album_track(&self, track: &AlbumTrack) -> crate::Result<bool> {
        album_tracks::create(&self.pool, track).await
    }

    /// Add a batch of tracks to the catalog; returns how many were new
    pub async fn import_album_tracks(&self, tracks: &[AlbumTrack]) -> crate::Result<u64> {
        album_tracks::create_many(&self.pool, tracks).await
    }
}

#[async_trait]
impl PlaylistStore for SqliteStore {
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        Ok(playlists::get_by_id(&self.pool, &id).await?)
    }

    async fn save_playlist(&self, playlist: Playlist) -> Result<Playlist> {
        Ok(playlists::save(&self.pool, &playlist).await?)
    }
}

#[async_trait]
impl AlbumTrackStore for SqliteStore {
    async fn get_album_track(&self, asin: &str, track_number: i32) -> Result<Option<AlbumTrack>> {
        Ok(album_tracks::get(&self.pool, asin, track_number).await?)
    }
}
