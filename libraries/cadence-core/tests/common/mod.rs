//! In-memory stores for exercising the activities end to end
#![allow(dead_code)]

use async_trait::async_trait;
use cadence_core::{AlbumTrack, AlbumTrackStore, Playlist, PlaylistId, PlaylistStore, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Whole-entity store with the same last-write-wins behaviour as the real one
#[derive(Default)]
pub struct InMemoryStore {
    playlists: Mutex<HashMap<PlaylistId, Playlist>>,
    tracks: Mutex<HashMap<(String, i32), AlbumTrack>>,
    saves: Mutex<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_playlist(&self, playlist: Playlist) {
        self.playlists
            .lock()
            .unwrap()
            .insert(playlist.id.clone(), playlist);
    }

    pub fn insert_track(&self, track: AlbumTrack) {
        self.tracks
            .lock()
            .unwrap()
            .insert((track.asin.clone(), track.track_number), track);
    }

    pub fn playlist(&self, id: &PlaylistId) -> Option<Playlist> {
        self.playlists.lock().unwrap().get(id).cloned()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl PlaylistStore for InMemoryStore {
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        Ok(self.playlists.lock().unwrap().get(&id).cloned())
    }

    async fn save_playlist(&self, playlist: Playlist) -> Result<Playlist> {
        *self.saves.lock().unwrap() += 1;
        self.playlists
            .lock()
            .unwrap()
            .insert(playlist.id.clone(), playlist.clone());
        Ok(playlist)
    }
}

#[async_trait]
impl AlbumTrackStore for InMemoryStore {
    async fn get_album_track(&self, asin: &str, track_number: i32) -> Result<Option<AlbumTrack>> {
        Ok(self
            .tracks
            .lock()
            .unwrap()
            .get(&(asin.to_string(), track_number))
            .cloned())
    }
}
