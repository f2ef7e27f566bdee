//! Store seams consumed by the playlist operations
//!
//! Both traits describe a plain key-value store: a miss is `Ok(None)`, never
//! an error. Turning a miss into `PlaylistNotFound` / `AlbumTrackNotFound`
//! is the job of the DAO layer in [`crate::dao`].

use crate::error::Result;
use crate::types::{AlbumTrack, Playlist, PlaylistId};
use async_trait::async_trait;

/// Playlist-by-id store
///
/// Implementations give read-your-writes consistency for a single key and
/// nothing stronger. There is no conditional write: the last save wins.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Load a playlist by ID
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Replace the whole stored playlist, returning the persisted state
    async fn save_playlist(&self, playlist: Playlist) -> Result<Playlist>;
}

/// Catalog store keyed by `(asin, track_number)`
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait AlbumTrackStore: Send + Sync {
    /// Load a catalog track by its composite key
    async fn get_album_track(&self, asin: &str, track_number: i32) -> Result<Option<AlbumTrack>>;
}
