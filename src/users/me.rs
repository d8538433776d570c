use axum::{Json, debug_handler, extract::State};
use sqlx::SqlitePool;
use tracing::info;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

use super::PublicUser;

#[debug_handler(state = AppState)]
pub(crate) async fn me(
    AuthUser(user_id): AuthUser,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<PublicUser>> {
    info!("GET /api/users/me");

    let Some(user_id) = user_id else {
        return Err(AppError::Unauthorized);
    };

    let user: Option<PublicUser> = sqlx::query_as("SELECT id,username FROM users WHERE id=?")
        .bind(&user_id)
        .fetch_optional(&db_pool)
        .await?;

    user.map(Json).ok_or(AppError::NotFound("User not found"))
}
