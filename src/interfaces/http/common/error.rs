//! API error type and its HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::ErrorResponse;
use crate::domain::RegistryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request body could not be read as the expected JSON.
    #[error("Dados inválidos: {0}")]
    InvalidBody(String),

    /// No route matches, including path parameters that are not a valid id.
    #[error("Recurso não encontrado")]
    RouteNotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Registry(RegistryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn validation_errors_are_bad_request() {
        for err in [
            ValidationError::MissingField,
            ValidationError::EmptyField,
            ValidationError::DuplicateEmail,
            ValidationError::EmailTakenByOther,
        ] {
            let api = ApiError::from(RegistryError::from(err));
            assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn not_found_keeps_registry_message() {
        let api = ApiError::from(RegistryError::NotFound { id: 9 });
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(api.to_string(), "Usuário não encontrado");
    }

    #[test]
    fn route_not_found_is_404() {
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
