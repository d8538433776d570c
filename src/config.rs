use std::{fmt::Display, str::FromStr};

use tracing::info;

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub requires_auth: bool,
    pub token_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: try_load("DATABASE_URL", "sqlite:guestlist.db?mode=rwc"),
            port: try_load("PORT", "3000"),
            requires_auth: try_load("REQUIRES_AUTH", "true"),
            token_secret: dotenv::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    dotenv::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_owned()
        })
        .parse()
        .map_err(|e| format!("invalid {key}: {e}"))
        .expect("Environment misconfigured")
}
