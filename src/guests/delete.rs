use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use sqlx::SqlitePool;
use tracing::info;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

use super::{Guest, find_guest};

/// Returns the removed record as a final snapshot.
#[debug_handler(state = AppState)]
pub(crate) async fn delete_guest(
    _user: AuthUser,
    Path(id): Path<String>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Guest>> {
    info!("DELETE /api/guests/{id}");

    let Some(guest) = find_guest(&db_pool, &id).await? else {
        return Err(AppError::NotFound("Guest not found"));
    };

    sqlx::query("DELETE FROM guests WHERE id=?")
        .bind(&id)
        .execute(&db_pool)
        .await?;

    Ok(Json(guest))
}
