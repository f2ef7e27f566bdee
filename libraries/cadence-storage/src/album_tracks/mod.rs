use crate::error::Result;
use cadence_core::types::AlbumTrack;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Get a catalog track by its composite key
pub async fn get(pool: &SqlitePool, asin: &str, track_number: i32) -> Result<Option<AlbumTrack>> {
    let row = sqlx::query(
        r#"
        SELECT asin, track_number, album_name, song_title
        FROM album_tracks
        WHERE asin = ? AND track_number = ?
        "#,
    )
    .bind(asin)
    .bind(track_number)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(album_track_from_row).transpose()
}

/// Add a track to the catalog
///
/// Catalog entries are immutable: if the key already exists nothing is
/// written and `false` is returned.
pub async fn create(pool: &SqlitePool, track: &AlbumTrack) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO album_tracks (asin, track_number, album_name, song_title)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(asin, track_number) DO NOTHING
        "#,
    )
    .bind(&track.asin)
    .bind(track.track_number)
    .bind(&track.album_name)
    .bind(&track.song_title)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Add many tracks in one transaction, returning how many were new
pub async fn create_many(pool: &SqlitePool, tracks: &[AlbumTrack]) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for track in tracks {
        let result = sqlx::query(
            r#"
            INSERT INTO album_tracks (asin, track_number, album_name, song_title)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(asin, track_number) DO NOTHING
            "#,
        )
        .bind(&track.asin)
        .bind(track.track_number)
        .bind(&track.album_name)
        .bind(&track.song_title)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

fn album_track_from_row(row: &SqliteRow) -> Result<AlbumTrack> {
    Ok(AlbumTrack {
        asin: row.try_get("asin")?,
        track_number: row.try_get("track_number")?,
        album_name: row.try_get("album_name")?,
        song_title: row.try_get("song_title")?,
    })
}
