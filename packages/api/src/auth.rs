//! # Session and account calls
//!
//! The backend keeps identity in a session cookie, so these functions carry
//! no tokens — the browser attaches the cookie and [`crate::http`] adds the
//! CSRF header where needed.

use crate::endpoints;
use crate::error::ApiError;
use crate::http::{self, Method};
use crate::models::{Credentials, Registration, User};

/// Ask the backend who the session belongs to. Rejected with 401/403 when
/// nobody is signed in.
pub async fn current_user() -> Result<User, ApiError> {
    http::get_json(&endpoints::auth_me()).await
}

/// Authenticate with username and password. On success the server rotates
/// the session cookie and returns the account.
pub async fn login(credentials: &Credentials) -> Result<User, ApiError> {
    http::send_json(Method::Post, &endpoints::auth_login(), credentials).await
}

/// Create an account. The reply body is ignored: registration does not sign
/// the user in, callers follow up with [`login`].
pub async fn register(registration: &Registration) -> Result<(), ApiError> {
    http::send_empty(Method::Post, &endpoints::auth_register(), Some(registration)).await
}

/// End the session. Callers drop their local user state regardless of the
/// outcome.
pub async fn logout() -> Result<(), ApiError> {
    http::send_empty(Method::Post, &endpoints::auth_logout(), http::NO_BODY).await
}
