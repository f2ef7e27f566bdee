//! Cadence Core
//!
//! Domain types, store seams and the playlist operations for Cadence.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `AlbumTrack`, `PlaylistId`, `SongOrder`
//! - **Store Seams**: `PlaylistStore` and `AlbumTrackStore`, implemented by
//!   `cadence-storage` and mocked in tests
//! - **DAOs**: not-found aware wrappers over the store seams
//! - **Activities**: one type per service operation
//! - **Error Handling**: unified `CadenceError` and `Result` types
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_core::activity::AddSongToPlaylistActivity;
//! use cadence_core::dao::{AlbumTrackDao, PlaylistDao};
//! use cadence_core::models::AddSongToPlaylistRequest;
//! use cadence_core::storage::{AlbumTrackStore, PlaylistStore};
//! use cadence_core::PlaylistId;
//! use std::sync::Arc;
//!
//! # async fn example(
//! #     playlists: Arc<dyn PlaylistStore>,
//! #     tracks: Arc<dyn AlbumTrackStore>,
//! # ) -> cadence_core::Result<()> {
//! let activity = AddSongToPlaylistActivity::new(
//!     PlaylistDao::new(playlists),
//!     AlbumTrackDao::new(tracks),
//! );
//!
//! let result = activity
//!     .handle_request(AddSongToPlaylistRequest {
//!         id: PlaylistId::new("p1"),
//!         asin: "B000002UAL".to_string(),
//!         track_number: 2,
//!         queue_next: true,
//!     })
//!     .await?;
//!
//! assert_eq!(result.songs[0].track_number, 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod activity;
pub mod converter;
pub mod dao;
pub mod error;
pub mod models;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CadenceError, InvalidAttributeError, Result};
pub use storage::{AlbumTrackStore, PlaylistStore};
pub use types::{AlbumTrack, InsertPosition, Playlist, PlaylistId, SongOrder};

#[cfg(any(test, feature = "mock"))]
pub use storage::{MockAlbumTrackStore, MockPlaylistStore};
