use super::ValidationError;

/// Raw name/email pair as received from a client.
///
/// `None` means the field was absent from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A name/email pair that passed validation. Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUserInput {
    pub name: String,
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Checks presence first, then emptiness after trimming.
    ///
    /// Email format is not checked.
    pub fn validate(&self) -> Result<ValidUserInput, ValidationError> {
        let (Some(name), Some(email)) = (self.name.as_deref(), self.email.as_deref()) else {
            return Err(ValidationError::MissingField);
        };

        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ValidationError::EmptyField);
        }

        Ok(ValidUserInput {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}
