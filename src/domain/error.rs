//! Domain errors

use thiserror::Error;

/// Rejected client input.
///
/// Messages are the ones shown to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Nome e email são obrigatórios")]
    MissingField,

    #[error("Nome e email não podem estar vazios")]
    EmptyField,

    #[error("Email já está em uso")]
    DuplicateEmail,

    /// Duplicate found while updating: the address belongs to a different user.
    #[error("Email já está em uso por outro usuário")]
    EmailTakenByOther,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Usuário não encontrado")]
    NotFound { id: u64 },
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_transparent() {
        let err = RegistryError::from(ValidationError::DuplicateEmail);
        assert_eq!(err.to_string(), "Email já está em uso");
    }

    #[test]
    fn update_conflict_names_the_other_user() {
        let err = RegistryError::from(ValidationError::EmailTakenByOther);
        assert_eq!(err.to_string(), "Email já está em uso por outro usuário");
    }

    #[test]
    fn not_found_message_does_not_leak_id() {
        let err = RegistryError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Usuário não encontrado");
    }
}
