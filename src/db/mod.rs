//! Storage gateway for the artists table
//!
//! Owns pool setup, table creation, and all row mutation. Handlers never
//! issue SQL directly.

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{info, warn};

mod artists;
pub use artists::{
    delete_artist, fetch_by_prefix, insert_artist, list_artists, update_artist, Artist,
};

/// Open the database pool, creating the file if it does not exist.
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    // mode=rwc: create the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    Ok(pool)
}

/// Create the artists table if absent.
///
/// Failure is logged and swallowed: a read-only or permission-restricted
/// database must not prevent startup.
pub async fn ensure_schema(pool: &SqlitePool) {
    let result = sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            user_id INTEGER PRIMARY KEY NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            birth_year TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await;

    match result {
        Ok(_) => info!("Artists table ready"),
        Err(e) => warn!("Artists table creation failed ({e}) - check sqlite database permissions"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn scratch_pool() -> (SqlitePool, TempDir) {
        let dir = TempDir::new().expect("Should create scratch dir");
        let pool = connect(&dir.path().join("artists.db"))
            .await
            .expect("Should open scratch database");
        ensure_schema(&pool).await;
        (pool, dir)
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let (pool, _dir) = scratch_pool().await;
        ensure_schema(&pool).await;

        let artists = list_artists(&pool).await.unwrap();
        assert!(artists.is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let (pool, _dir) = scratch_pool().await;

        let first = insert_artist(&pool, "Alan", "Moore", "1953").await.unwrap();
        let second = insert_artist(&pool, "Alan", "Moore", "1953").await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn update_and_delete_ignore_absent_ids() {
        let (pool, _dir) = scratch_pool().await;

        update_artist(&pool, "99999", "Nobody", "Here", "1999")
            .await
            .unwrap();
        delete_artist(&pool, "99999").await.unwrap();
    }

    #[tokio::test]
    async fn prefix_lookup_falls_back_to_placeholder() {
        let (pool, _dir) = scratch_pool().await;

        let id = insert_artist(&pool, "Alan", "Moore", "1953").await.unwrap();

        let hit = fetch_by_prefix(&pool, "Abc").await.unwrap();
        assert_eq!(hit.user_id, id);
        assert_eq!(hit.first_name, "Alan");

        let miss = fetch_by_prefix(&pool, "Zed").await.unwrap();
        assert_eq!(miss.first_name, "Random");
        assert_eq!(miss.last_name, "Artist");
        assert_eq!(miss.birth_year, "1900");
        assert!((1..=1000).contains(&miss.user_id));
    }
}
