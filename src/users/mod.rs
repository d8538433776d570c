mod me;
mod register;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register::register_user))
        .route("/me", get(me::me))
}

/// The serializable subset of a user record. The password hash never
/// leaves the store.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
}
