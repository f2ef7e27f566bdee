mod album_track;
mod ids;
mod playlist;
mod song_order;

pub use album_track::AlbumTrack;
pub use ids::PlaylistId;
pub use playlist::{InsertPosition, Playlist};
pub use song_order::SongOrder;
