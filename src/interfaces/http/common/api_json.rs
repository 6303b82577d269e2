//! JSON extractor with API-shaped rejections
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but a body that is not valid
//! JSON for `T` (wrong content type, syntax error, wrong field type) is
//! rejected with `400 {"error": ...}` instead of axum's plain-text default.
//! Field presence and emptiness are left to the domain validation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ApiError;

pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            debug!(reason = %rejection.body_text(), "Rejected request body");
            ApiError::from(rejection)
        })?;

        Ok(ApiJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
