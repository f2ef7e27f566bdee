/// Catalog track types
use serde::{Deserialize, Serialize};

/// A song on a specific album release, keyed by `(asin, track_number)`.
///
/// Catalog entries never change once written. Playlists embed copies of
/// them, so a later catalog edit does not reach playlists that already hold
/// the track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumTrack {
    /// Album identifier
    pub asin: String,

    /// Position on the album; not range checked
    pub track_number: i32,

    /// Album title
    #[serde(default)]
    pub album_name: Option<String>,

    /// Song title
    #[serde(default)]
    pub song_title: Option<String>,
}

impl AlbumTrack {
    /// Create a catalog track with only its key populated
    pub fn new(asin: impl Into<String>, track_number: i32) -> Self {
        Self {
            asin: asin.into(),
            track_number,
            album_name: None,
            song_title: None,
        }
    }

    /// Set the album name
    #[must_use]
    pub fn with_album_name(mut self, album_name: impl Into<String>) -> Self {
        self.album_name = Some(album_name.into());
        self
    }

    /// Set the song title
    #[must_use]
    pub fn with_song_title(mut self, song_title: impl Into<String>) -> Self {
        self.song_title = Some(song_title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let track = AlbumTrack::new("B000001", 3)
            .with_album_name("Blue Train")
            .with_song_title("Locomotion");

        assert_eq!(track.album_name.as_deref(), Some("Blue Train"));
        assert_eq!(track.song_title.as_deref(), Some("Locomotion"));
    }

    #[test]
    fn snapshot_without_optional_fields_deserializes() {
        let track: AlbumTrack =
            serde_json::from_str(r#"{"asin":"B1","track_number":-1}"#).unwrap();
        assert_eq!(track, AlbumTrack::new("B1", -1));
    }
}
