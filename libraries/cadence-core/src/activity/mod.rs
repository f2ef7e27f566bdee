//! Service operations
//!
//! One activity per boundary operation. Each is built from the DAOs it needs
//! and handles one request to completion; activities hold no mutable state.

mod add_song_to_playlist;
mod create_playlist;
mod get_playlist;
mod get_playlist_songs;
mod update_playlist;

pub use add_song_to_playlist::AddSongToPlaylistActivity;
pub use create_playlist::CreatePlaylistActivity;
pub use get_playlist::GetPlaylistActivity;
pub use get_playlist_songs::GetPlaylistSongsActivity;
pub use update_playlist::UpdatePlaylistActivity;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::{AlbumTrack, Playlist};

    pub fn album_track(track_number: i32) -> AlbumTrack {
        AlbumTrack::new(format!("test-asin-{track_number}"), track_number)
            .with_album_name(format!("Album {track_number}"))
            .with_song_title(format!("Song {track_number}"))
    }

    pub fn playlist_with_tracks(n: i32) -> Playlist {
        let mut playlist = Playlist::new("Test Playlist", "customer-1");
        playlist.set_song_list((1..=n).map(album_track).collect());
        playlist
    }
}
