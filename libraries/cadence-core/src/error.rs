/// Core error types for Cadence
use crate::types::PlaylistId;
use thiserror::Error;

/// Result type alias using `CadenceError`
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Core error type for Cadence
///
/// Every variant is terminal for the call that raised it: nothing in this
/// crate retries or substitutes a fallback value.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// No playlist stored under the given ID
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// No catalog entry for the given album and track number
    #[error("Album track not found: asin {asin}, track number {track_number}")]
    AlbumTrackNotFound { asin: String, track_number: i32 },

    /// Missing or malformed request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A playlist attribute failed validation
    #[error(transparent)]
    InvalidAttribute(#[from] InvalidAttributeError),

    /// Failure inside a store implementation
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Attribute validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAttributeError {
    /// The supplied value is not acceptable
    #[error("Invalid attribute value: {0}")]
    Value(String),

    /// The attribute cannot be changed once set
    #[error("Invalid attribute change: {0}")]
    Change(String),
}

impl CadenceError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an album track not found error
    pub fn album_track_not_found(asin: impl Into<String>, track_number: i32) -> Self {
        Self::AlbumTrackNotFound {
            asin: asin.into(),
            track_number,
        }
    }

    /// Stable name of the error kind, used at service boundaries
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PlaylistNotFound(_) => "PlaylistNotFound",
            Self::AlbumTrackNotFound { .. } => "AlbumTrackNotFound",
            Self::InvalidRequest(_) => "InvalidRequest",
            Self::InvalidAttribute(InvalidAttributeError::Value(_)) => "InvalidAttributeValue",
            Self::InvalidAttribute(InvalidAttributeError::Change(_)) => "InvalidAttributeChange",
            Self::Storage(_) => "Storage",
        }
    }

    /// Whether the error describes something the caller asked for that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PlaylistNotFound(_) | Self::AlbumTrackNotFound { .. }
        )
    }
}
