use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{AppError, AppState};

use super::{X_AUTH_TOKEN, token};

/// Identity of the caller, decoded from the `X-Auth-Token` header. The
/// inner value is `None` only when the server runs with `requires_auth`
/// off and requests pass through anonymously.
pub struct AuthUser(pub Option<String>);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.requires_auth {
            return Ok(Self(None));
        }

        let token = parts
            .headers
            .get(&X_AUTH_TOKEN)
            .and_then(|value| value.to_str().ok())
            .filter(|token| !token.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let claims = token::verify(token, &state.config.token_secret)
            .map_err(|_| AppError::InvalidToken)?;

        Ok(Self(Some(claims.sub)))
    }
}
