/// Playlist domain types
use crate::types::{AlbumTrack, PlaylistId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Owner of the playlist
    pub customer_id: String,

    /// Cached length of `song_list`
    pub song_count: u32,

    /// Free-form tags; `None` when the playlist was created without any
    pub tags: Option<BTreeSet<String>>,

    /// Songs in playback order.
    ///
    /// `None` means the playlist never had a song list, which is not the
    /// same thing as an empty one.
    pub song_list: Option<Vec<AlbumTrack>>,
}

/// Where a newly added song lands in the play order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Play immediately next (index 0)
    Front,
    /// Play after everything already queued
    Back,
}

impl InsertPosition {
    /// Map the boundary `queueNext` flag to a position
    pub fn from_queue_next(queue_next: bool) -> Self {
        if queue_next {
            Self::Front
        } else {
            Self::Back
        }
    }
}

impl Playlist {
    /// Create a new, empty playlist with a generated ID
    pub fn new(name: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            customer_id: customer_id.into(),
            song_count: 0,
            tags: None,
            song_list: Some(Vec::new()),
        }
    }

    /// Attach tags; an empty set is stored as no tags at all
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        let tags: BTreeSet<String> = tags.into_iter().collect();
        self.tags = if tags.is_empty() { None } else { Some(tags) };
        self
    }

    /// Songs in playback order, empty if the playlist never had any
    pub fn songs(&self) -> &[AlbumTrack] {
        self.song_list.as_deref().unwrap_or_default()
    }

    /// Replace the whole song list, keeping `song_count` in step
    pub fn set_song_list(&mut self, songs: Vec<AlbumTrack>) {
        self.song_count = songs.len() as u32;
        self.song_list = Some(songs);
    }

    /// Insert a track at the head or the tail of the song list.
    ///
    /// No deduplication: adding the same track twice yields two entries.
    pub fn add_song(&mut self, track: AlbumTrack, position: InsertPosition) {
        let mut songs = self.song_list.take().unwrap_or_default();
        match position {
            InsertPosition::Front => songs.insert(0, track),
            InsertPosition::Back => songs.push(track),
        }
        self.set_song_list(songs);
    }
}
