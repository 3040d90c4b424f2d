//! Row-level operations on the artists table

use rand::Rng;
use serde::Serialize;
use sqlx::SqlitePool;

/// One artist row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Artist {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Stored and returned as text, never validated as numeric
    pub birth_year: String,
}

/// Insert a row and return the storage-assigned id.
///
/// No uniqueness constraint on names: duplicates produce distinct ids.
pub async fn insert_artist(
    pool: &SqlitePool,
    first_name: &str,
    last_name: &str,
    birth_year: &str,
) -> sqlx::Result<i64> {
    let result =
        sqlx::query("INSERT INTO artists (first_name, last_name, birth_year) VALUES (?, ?, ?)")
            .bind(first_name)
            .bind(last_name)
            .bind(birth_year)
            .execute(pool)
            .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite all fields of the row matching `user_id`.
///
/// Succeeds even when no row matches: a single UPDATE with no existence
/// check avoids a check-then-write race.
pub async fn update_artist(
    pool: &SqlitePool,
    user_id: &str,
    first_name: &str,
    last_name: &str,
    birth_year: &str,
) -> sqlx::Result<()> {
    sqlx::query("UPDATE artists SET first_name = ?, last_name = ?, birth_year = ? WHERE user_id = ?")
        .bind(first_name)
        .bind(last_name)
        .bind(birth_year)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove the row matching `user_id`. Idempotent: deleting an absent id
/// succeeds.
pub async fn delete_artist(pool: &SqlitePool, user_id: &str) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM artists WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Look up a record by the first character of `key` against `first_name`.
///
/// This intentionally preserves the original lookup contract: the match is
/// a one-character name prefix, NOT the primary key, and an unmatched key
/// yields a fabricated stand-in record instead of an absence signal.
pub async fn fetch_by_prefix(pool: &SqlitePool, key: &str) -> sqlx::Result<Artist> {
    let prefix: String = key.chars().take(1).collect();

    let row = sqlx::query_as::<_, Artist>(
        "SELECT user_id, first_name, last_name, birth_year FROM artists \
         WHERE substr(first_name, 1, 1) = ?",
    )
    .bind(&prefix)
    .fetch_optional(pool)
    .await?;

    Ok(row.unwrap_or_else(placeholder_artist))
}

/// List every row. Insertion order is not guaranteed.
pub async fn list_artists(pool: &SqlitePool) -> sqlx::Result<Vec<Artist>> {
    sqlx::query_as::<_, Artist>(
        "SELECT user_id, first_name, last_name, birth_year FROM artists",
    )
    .fetch_all(pool)
    .await
}

fn placeholder_artist() -> Artist {
    Artist {
        user_id: rand::thread_rng().gen_range(1..=1000),
        first_name: "Random".to_string(),
        last_name: "Artist".to_string(),
        birth_year: "1900".to_string(),
    }
}
