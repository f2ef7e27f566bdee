use crate::error::{Result, StorageError};
use cadence_core::types::{Playlist, PlaylistId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, customer_id, song_count, tags, song_list
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(playlist_from_row).transpose()
}

/// Insert or fully replace a playlist
///
/// There is no version check; concurrent writers to the same ID overwrite
/// each other and the last one wins.
pub async fn save(pool: &SqlitePool, playlist: &Playlist) -> Result<Playlist> {
    let tags = playlist
        .tags
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;
    let song_list = playlist
        .song_list
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    sqlx::query(
        r#"
        INSERT INTO playlists (id, name, customer_id, song_count, tags, song_list)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            customer_id = excluded.customer_id,
            song_count = excluded.song_count,
            tags = excluded.tags,
            song_list = excluded.song_list,
            updated_at = datetime('now')
        "#,
    )
    .bind(&playlist.id)
    .bind(&playlist.name)
    .bind(&playlist.customer_id)
    .bind(playlist.song_count)
    .bind(tags)
    .bind(song_list)
    .execute(pool)
    .await?;

    tracing::debug!(playlist_id = %playlist.id, songs = playlist.song_count, "Playlist saved");

    get_by_id(pool, &playlist.id)
        .await?
        .ok_or_else(|| StorageError::not_found("Playlist", playlist.id.as_str()))
}

fn playlist_from_row(row: &SqliteRow) -> Result<Playlist> {
    let tags: Option<String> = row.try_get("tags")?;
    let song_list: Option<String> = row.try_get("song_list")?;

    Ok(Playlist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        customer_id: row.try_get("customer_id")?,
        song_count: row.try_get("song_count")?,
        tags: tags.as_deref().map(serde_json::from_str).transpose()?,
        song_list: song_list.as_deref().map(serde_json::from_str).transpose()?,
    })
}
