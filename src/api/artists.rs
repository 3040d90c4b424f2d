//! CRUD handlers for /artists

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::db::{self, Artist};
use crate::error::{ApiError, Result};
use crate::validate::{string_field, validate_payload};
use crate::AppState;

/// GET /artists
///
/// Returns every record. Empty table yields an empty array, not an error.
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    let artists = db::list_artists(&state.db).await?;
    Ok(Json(artists))
}

/// POST /artists
///
/// Requires non-empty string `first_name` and `birth_year`; `last_name`
/// defaults to the empty string. Responds with the new integer id.
pub async fn create_artist(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<i64>> {
    let Json(payload) = payload.map_err(rejection_error)?;

    validate_payload(&payload, &["first_name", "birth_year"])
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let first_name = string_field(&payload, "first_name");
    let last_name = string_field(&payload, "last_name");
    let birth_year = string_field(&payload, "birth_year");

    let user_id = db::insert_artist(&state.db, &first_name, &last_name, &birth_year).await?;
    info!("Created artist {user_id} ({first_name})");

    Ok(Json(user_id))
}

/// PUT /artists
///
/// Overwrites all fields of the record matching `user_id`. All four fields
/// must be non-empty strings; an absent id still reports success.
pub async fn update_artist(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<bool>> {
    let Json(payload) = payload.map_err(rejection_error)?;

    validate_payload(&payload, &["user_id", "first_name", "last_name", "birth_year"])
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user_id = string_field(&payload, "user_id");
    let first_name = string_field(&payload, "first_name");
    let last_name = string_field(&payload, "last_name");
    let birth_year = string_field(&payload, "birth_year");

    db::update_artist(&state.db, &user_id, &first_name, &last_name, &birth_year).await?;
    info!("Updated artist {user_id}");

    Ok(Json(true))
}

/// DELETE /artists/:user_id
///
/// Idempotent: deleting an absent id reports success.
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<bool>> {
    if user_id.is_empty() {
        return Err(ApiError::BadRequest("Invalid user_id".to_string()));
    }

    db::delete_artist(&state.db, &user_id).await?;
    info!("Deleted artist {user_id}");

    Ok(Json(true))
}

/// GET /artists/:user_id
///
/// Lookup is a one-character name-prefix match (see `db::fetch_by_prefix`);
/// an unmatched key returns a fabricated placeholder record, never 404.
pub async fn get_artist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Artist>> {
    if user_id.is_empty() {
        return Err(ApiError::BadRequest("Invalid user_id".to_string()));
    }

    let artist = db::fetch_by_prefix(&state.db, &user_id).await?;
    Ok(Json(artist))
}

/// Map body-extraction failures to the 400 messages callers expect.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => "Request must be JSON",
        _ => "Invalid JSON payload",
    };
    ApiError::BadRequest(message.to_string())
}
