use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::{AppError, AppResult, AppState, Config, auth};

use super::PublicUser;

const BCRYPT_COST: u32 = 10;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RegisterUser {
    username: String,
    password: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn register_user(
    State(db_pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(body): Json<RegisterUser>,
) -> AppResult<Response> {
    info!("POST /api/users");

    if body.username.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation("Username and password required"));
    }

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE username=?")
        .bind(&body.username)
        .fetch_optional(&db_pool)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("User already registered"));
    }

    let id = Uuid::now_v7().to_string();
    let hash = bcrypt::hash(&body.password, BCRYPT_COST)?;

    sqlx::query("INSERT INTO users (id,username,password) VALUES (?,?,?)")
        .bind(&id)
        .bind(&body.username)
        .bind(&hash)
        .execute(&db_pool)
        .await?;

    let token = auth::issue(&id, &config.token_secret)?;

    Ok((
        [(auth::X_AUTH_TOKEN, token)],
        Json(PublicUser {
            id,
            username: body.username,
        }),
    )
        .into_response())
}
