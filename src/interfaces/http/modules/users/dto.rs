//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserInput};

/// User API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// ID único do usuário
    pub id: u64,
    /// Nome completo do usuário
    #[serde(rename = "nome")]
    #[schema(example = "Anna Julia Higa Farincho")]
    pub name: String,
    /// Email do usuário
    #[schema(example = "anna.julia@email.com")]
    pub email: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Create / update user request
///
/// Both fields are required; absence is reported by the registry so the
/// client gets the same message whichever field is missing.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Nome completo do usuário
    #[serde(rename = "nome")]
    #[schema(example = "Anna Julia Higa Farincho")]
    pub name: Option<String>,
    /// Email do usuário
    #[schema(example = "anna.julia@email.com")]
    pub email: Option<String>,
}

impl From<UserRequest> for UserInput {
    fn from(r: UserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_name_as_nome() {
        let dto = UserDto::from(User::new(1, "Ana", "ana@x.com"));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "nome": "Ana", "email": "ana@x.com"}));
    }

    #[test]
    fn request_tolerates_absent_and_null_fields() {
        let req: UserRequest = serde_json::from_str(r#"{"nome": null}"#).unwrap();
        let input = UserInput::from(req);
        assert_eq!(input.name, None);
        assert_eq!(input.email, None);
    }

    #[test]
    fn request_ignores_client_supplied_id() {
        let req: UserRequest =
            serde_json::from_str(r#"{"id": 99, "nome": "Ana", "email": "a@x.com"}"#).unwrap();
        assert_eq!(UserInput::from(req), UserInput::new("Ana", "a@x.com"));
    }
}
