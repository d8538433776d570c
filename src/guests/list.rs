use axum::{Json, debug_handler, extract::State};
use sqlx::SqlitePool;
use tracing::info;

use crate::{AppResult, AppState, auth::AuthUser};

use super::Guest;

#[debug_handler(state = AppState)]
pub(crate) async fn list_guests(
    _user: AuthUser,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Guest>>> {
    info!("GET /api/guests");

    let guests: Vec<Guest> = sqlx::query_as("SELECT * FROM guests ORDER BY last_name ASC")
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(guests))
}
