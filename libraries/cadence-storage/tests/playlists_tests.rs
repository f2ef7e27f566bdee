//! Integration tests for the playlists slice
//!
//! Covers:
//! - Song list order surviving a round trip
//! - NULL song list vs empty song list
//! - Whole-record replacement (last write wins)
//! - Tags


use cadence_core::storage::PlaylistStore;
use cadence_core::types::{AlbumTrack, InsertPosition, Playlist, PlaylistId};
use cadence_storage::playlists;
use std::collections::BTreeSet;
use test_helpers::*;

#[tokio::test]
async fn test_save_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let songs = vec![test_track("B", 2), test_track("A", 1), test_track("C", 3)];
    let playlist = test_playlist("Road Trip", songs.clone());

    let saved = playlists::save(pool, &playlist)
        .await
        .expect("Failed to save playlist");
    assert_eq!(saved, playlist);

    let retrieved = playlists::get_by_id(pool, &playlist.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(retrieved.name, "Road Trip");
    assert_eq!(retrieved.customer_id, "customer-1");
    assert_eq!(retrieved.song_count, 3);
    assert_eq!(retrieved.songs(), songs.as_slice());
}

#[tokio::test]
async fn test_get_missing_playlist_is_none() {
    let test_db = TestDb::new().await;

    let result = playlists::get_by_id(test_db.pool(), &PlaylistId::new("missing-id"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_absent_and_empty_song_lists_are_distinct() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut absent = Playlist::new("Absent", "customer-1");
    absent.song_list = None;
    let empty = Playlist::new("Empty", "customer-1");

    playlists::save(pool, &absent).await.unwrap();
    playlists::save(pool, &empty).await.unwrap();

    let absent = playlists::get_by_id(pool, &absent.id).await.unwrap().unwrap();
    let empty = playlists::get_by_id(pool, &empty.id).await.unwrap().unwrap();

    assert_eq!(absent.song_list, None);
    assert_eq!(empty.song_list, Some(vec![]));
    assert!(absent.songs().is_empty());
}

#[tokio::test]
async fn test_save_replaces_whole_record() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut playlist = test_playlist("Original", vec![test_track("A", 1)]);
    playlists::save(pool, &playlist).await.unwrap();

    playlist.name = "Renamed".to_string();
    playlist.add_song(test_track("B", 2), InsertPosition::Front);
    playlists::save(pool, &playlist).await.unwrap();

    let retrieved = playlists::get_by_id(pool, &playlist.id).await.unwrap().unwrap();
    assert_eq!(retrieved.name, "Renamed");
    assert_eq!(retrieved.song_count, 2);
    assert_eq!(retrieved.songs()[0], test_track("B", 2));
}

#[tokio::test]
async fn test_last_write_wins() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let base = test_playlist("Shared", vec![test_track("A", 1)]);
    playlists::save(pool, &base).await.unwrap();

    // Two writers start from the same snapshot
    let mut first = base.clone();
    first.add_song(test_track("B", 2), InsertPosition::Back);
    let mut second = base.clone();
    second.add_song(test_track("C", 3), InsertPosition::Back);

    playlists::save(pool, &first).await.unwrap();
    playlists::save(pool, &second).await.unwrap();

    let retrieved = playlists::get_by_id(pool, &base.id).await.unwrap().unwrap();
    assert_eq!(
        retrieved.songs(),
        &[test_track("A", 1), test_track("C", 3)][..]
    );
}

#[tokio::test]
async fn test_tags_round_trip() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let tagged = Playlist::new("Tagged", "customer-1")
        .with_tags(vec!["focus".to_string(), "ambient".to_string()]);
    let untagged = Playlist::new("Untagged", "customer-1");

    playlists::save(pool, &tagged).await.unwrap();
    playlists::save(pool, &untagged).await.unwrap();

    let tagged = playlists::get_by_id(pool, &tagged.id).await.unwrap().unwrap();
    let untagged = playlists::get_by_id(pool, &untagged.id).await.unwrap().unwrap();

    let expected: BTreeSet<String> = ["ambient", "focus"].iter().map(|s| s.to_string()).collect();
    assert_eq!(tagged.tags, Some(expected));
    assert_eq!(untagged.tags, None);
}

#[tokio::test]
async fn test_duplicate_songs_are_kept() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let track = test_track("A", 1);
    let playlist = test_playlist("Repeat", vec![track.clone(), track.clone(), track]);
    playlists::save(pool, &playlist).await.unwrap();

    let retrieved = playlists::get_by_id(pool, &playlist.id).await.unwrap().unwrap();
    assert_eq!(retrieved.song_count, 3);
    assert_eq!(retrieved.songs().len(), 3);
}

#[tokio::test]
async fn test_store_trait_round_trip() {
    let test_db = TestDb::new().await;
    let store = &test_db.store;

    let playlist = test_playlist("Via trait", vec![AlbumTrack::new("X", -4)]);
    let saved = store.save_playlist(playlist.clone()).await.unwrap();
    let loaded = store.get_playlist(playlist.id.clone()).await.unwrap();

    assert_eq!(loaded, Some(saved));
}
