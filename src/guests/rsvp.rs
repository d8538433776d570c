use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::{AppError, AppResult};

use super::{Guest, find_guest, store_guest, validate_bounds};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RsvpUpdate {
    email: Option<String>,
    attending: bool,
    plusses: i64,
    dietary_restrictions: Option<String>,
    karaoke_song: Option<String>,
}

/// Self-service update. The guest id doubles as the capability to edit the
/// record, so the route takes no token; an unknown id answers 400, not 404.
/// The submitted form overwrites all five RSVP fields.
#[debug_handler]
pub(crate) async fn rsvp_guest(
    Path(id): Path<String>,
    State(db_pool): State<SqlitePool>,
    Json(body): Json<RsvpUpdate>,
) -> AppResult<Json<Guest>> {
    info!("PUT /api/guests/{id}/rsvp");

    let Some(mut guest) = find_guest(&db_pool, &id).await? else {
        return Err(AppError::BadRequest("No guest found"));
    };

    validate_bounds(
        body.email.as_deref(),
        body.dietary_restrictions.as_deref(),
        body.karaoke_song.as_deref(),
    )?;

    guest.email = body.email;
    guest.attending = body.attending;
    guest.plusses = body.plusses;
    guest.dietary_restrictions = body.dietary_restrictions;
    guest.karaoke_song = body.karaoke_song;
    guest.date_modified = Utc::now();

    store_guest(&db_pool, &guest).await?;

    Ok(Json(guest))
}
