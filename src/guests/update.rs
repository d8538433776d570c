use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

use super::{Guest, find_guest, store_guest, validate_bounds};

/// Administrative patch: only fields present in the body are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct GuestPatch {
    last_name: Option<String>,
    first_name: Option<String>,
    other_names: Option<Vec<String>>,
    email: Option<String>,
    attending: Option<bool>,
    max_plusses: Option<i64>,
    plusses: Option<i64>,
    dietary_restrictions: Option<String>,
    karaoke_song: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn update_guest(
    _user: AuthUser,
    Path(id): Path<String>,
    State(db_pool): State<SqlitePool>,
    Json(patch): Json<GuestPatch>,
) -> AppResult<Json<Guest>> {
    info!("PUT /api/guests/{id}");

    let Some(mut guest) = find_guest(&db_pool, &id).await? else {
        return Err(AppError::NotFound("Guest not found"));
    };

    if let Some(last_name) = patch.last_name {
        guest.last_name = last_name;
    }
    if let Some(first_name) = patch.first_name {
        guest.first_name = first_name;
    }
    if let Some(other_names) = patch.other_names {
        guest.other_names = other_names;
    }
    if let Some(email) = patch.email {
        guest.email = Some(email);
    }
    if let Some(attending) = patch.attending {
        guest.attending = attending;
    }
    if let Some(max_plusses) = patch.max_plusses {
        guest.max_plusses = max_plusses;
    }
    if let Some(plusses) = patch.plusses {
        guest.plusses = plusses;
    }
    if let Some(dietary_restrictions) = patch.dietary_restrictions {
        guest.dietary_restrictions = Some(dietary_restrictions);
    }
    if let Some(karaoke_song) = patch.karaoke_song {
        guest.karaoke_song = Some(karaoke_song);
    }

    if guest.last_name.is_empty() || guest.first_name.is_empty() {
        return Err(AppError::Validation("Names required"));
    }
    validate_bounds(
        guest.email.as_deref(),
        guest.dietary_restrictions.as_deref(),
        guest.karaoke_song.as_deref(),
    )?;

    guest.date_modified = Utc::now();
    store_guest(&db_pool, &guest).await?;

    Ok(Json(guest))
}
