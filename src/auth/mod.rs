mod guard;
mod token;

pub use guard::AuthUser;
pub use token::{Claims, issue, verify};

use axum::http::HeaderName;

pub const X_AUTH_TOKEN: HeaderName = HeaderName::from_static("x-auth-token");
