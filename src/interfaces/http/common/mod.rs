//! Shared HTTP types: response bodies, extractors and the API error type.

pub mod api_json;
pub mod error;
pub mod user_id;

pub use api_json::ApiJson;
pub use error::ApiError;
pub use user_id::UserId;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Mensagem de erro
    #[schema(example = "Usuário não encontrado")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Confirmation body for operations without a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Mensagem de sucesso
    #[schema(example = "Usuário excluído com sucesso")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
