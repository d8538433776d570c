use axum::{Json, debug_handler, extract::State};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

use super::{Guest, insert_guest};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CreateGuest {
    last_name: String,
    first_name: String,
    other_names: Vec<String>,
    max_plusses: i64,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_guest(
    AuthUser(user_id): AuthUser,
    State(db_pool): State<SqlitePool>,
    Json(body): Json<CreateGuest>,
) -> AppResult<Json<Guest>> {
    info!("POST /api/guests");

    if body.last_name.is_empty() || body.first_name.is_empty() {
        return Err(AppError::Validation("Names required"));
    }

    let now = Utc::now();
    let guest = Guest {
        id: Uuid::now_v7().to_string(),
        last_name: body.last_name,
        first_name: body.first_name,
        other_names: body.other_names,
        email: None,
        attending: false,
        max_plusses: body.max_plusses,
        plusses: 0,
        dietary_restrictions: None,
        karaoke_song: None,
        added_by: user_id,
        date_created: now,
        date_modified: now,
    };

    insert_guest(&db_pool, &guest).await?;

    Ok(Json(guest))
}
