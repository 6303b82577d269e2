/// A registered user.
///
/// `id` is assigned by the registry and never changes. `name` and `email`
/// are stored trimmed and are never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Whether this user's email matches `normalized` (see [`normalize_email`]).
    pub fn has_email(&self, normalized: &str) -> bool {
        normalize_email(&self.email) == normalized
    }
}

/// Comparison key for email uniqueness: trimmed and lower-cased.
///
/// Only used for comparisons; stored emails keep the casing the client sent.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_ignores_case_and_padding() {
        assert_eq!(normalize_email("  Anna.Julia@Email.COM "), "anna.julia@email.com");
    }

    #[test]
    fn has_email_compares_case_insensitively() {
        let user = User::new(1, "Anna", "Anna@Email.com");
        assert!(user.has_email("anna@email.com"));
        assert!(!user.has_email("anna@other.com"));
    }
}
