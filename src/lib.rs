pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod guests;
pub mod users;

use axum::{
    Router,
    extract::FromRef,
    http::{Method, header::CONTENT_TYPE},
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Config,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, auth::X_AUTH_TOKEN])
        .expose_headers([auth::X_AUTH_TOKEN]);

    Router::new()
        .nest("/api/guests", guests::router())
        .nest("/api/users", users::router())
        .layer(cors)
        .with_state(state)
}
