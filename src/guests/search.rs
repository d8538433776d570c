use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::AppResult;

use super::Guest;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SearchGuests {
    last_name: String,
    first_name: String,
}

/// Public lookup for returning guests hunting their own invitation, so it
/// takes no token. Last name must match the stored value exactly; the
/// first-name pattern is matched case-insensitively against the first name
/// and every listed alias.
#[debug_handler]
pub(crate) async fn search_guests(
    State(db_pool): State<SqlitePool>,
    Json(body): Json<SearchGuests>,
) -> AppResult<Json<Vec<Guest>>> {
    info!("POST /api/guests/search");

    let candidates: Vec<Guest> = sqlx::query_as("SELECT * FROM guests WHERE last_name=?")
        .bind(&body.last_name)
        .fetch_all(&db_pool)
        .await?;

    let guests = candidates
        .into_iter()
        .filter(|guest| matches_guest(&body.first_name, guest))
        .collect();

    Ok(Json(guests))
}

fn matches_guest(pattern: &str, guest: &Guest) -> bool {
    matches_name(pattern, &guest.first_name)
        || guest.other_names.iter().any(|name| matches_name(pattern, name))
}

// An empty pattern is the wildcard.
fn matches_name(pattern: &str, name: &str) -> bool {
    pattern.is_empty() || name.to_lowercase().contains(&pattern.to_lowercase())
}
