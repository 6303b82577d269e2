//! `{id}` path parameter extractor
//!
//! Anything that is not a non-negative integer is treated like an unknown
//! route (404) and never reaches the registry.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tracing::debug;

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub u64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(reason = %rejection.body_text(), "Invalid user id in path");
                ApiError::RouteNotFound
            })?;

        Ok(UserId(id))
    }
}
