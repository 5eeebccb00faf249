//! Session identity carried by the login step's cookies.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
};
use patocash_core::backend::UserId;

use crate::error::ApiError;

pub const USER_ID_COOKIE: &str = "idUser";
pub const USERNAME_COOKIE: &str = "username";

/// The signed-in user. Rejects with a redirect to `/` when `idUser` is missing.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: UserId,
    pub username: Option<String>,
}

/// Looks up a cookie value across every `Cookie` header of the request.
pub fn cookie_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = cookie_value(parts, USER_ID_COOKIE).ok_or(ApiError::Unauthenticated)?;
        Ok(Session {
            user: UserId::new(user),
            username: cookie_value(parts, USERNAME_COOKIE),
        })
    }
}
