//! In-memory user registry
//!
//! Owns every user record and the id counter. All mutations go through a
//! single `RwLock`, so uniqueness and id monotonicity hold even when the
//! HTTP layer dispatches requests on several worker threads.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::seed::seed_users;
use crate::domain::{
    normalize_email, RegistryError, RegistryResult, User, UserInput, ValidationError,
};

/// Shared handle passed to the HTTP layer.
pub type SharedUserRegistry = Arc<UserRegistry>;

#[derive(Debug)]
struct RegistryState {
    /// Insertion order is the listing order.
    users: Vec<User>,
    /// Always greater than every id ever handed out.
    next_id: u64,
}

impl RegistryState {
    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    /// Whether any user other than `except` already holds `email`.
    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        let normalized = normalize_email(email);
        self.users
            .iter()
            .filter(|u| Some(u.id) != except)
            .any(|u| u.has_email(&normalized))
    }
}

#[derive(Debug)]
pub struct UserRegistry {
    state: RwLock<RegistryState>,
}

impl UserRegistry {
    /// Empty registry; the first user gets id 1.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Registry holding the fixture users (ids 1–3).
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Registry starting from `users`, in the given order.
    ///
    /// The id counter starts one past the highest id present.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(RegistryState { users, next_id }),
        }
    }

    pub fn shared(self) -> SharedUserRegistry {
        Arc::new(self)
    }

    // Mutations never leave the state half-written, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Snapshot of all users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.read().users.clone()
    }

    pub fn get(&self, id: u64) -> RegistryResult<User> {
        self.read()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Validate `input` and append a new user with a fresh id.
    pub fn create(&self, input: &UserInput) -> RegistryResult<User> {
        let valid = input.validate().inspect_err(|e| {
            debug!(reason = %e, "Rejected user creation");
        })?;

        let mut state = self.write();
        if state.email_taken(&valid.email, None) {
            debug!(email = %valid.email, "Rejected user creation: duplicate email");
            return Err(ValidationError::DuplicateEmail.into());
        }

        let user = User::new(state.next_id, valid.name, valid.email);
        state.next_id += 1;
        state.users.push(user.clone());

        info!(user_id = user.id, email = %user.email, "User created");
        Ok(user)
    }

    /// Replace name and email of an existing user. Id and position are kept.
    ///
    /// A user may keep its own email; only other users count as duplicates.
    pub fn update(&self, id: u64, input: &UserInput) -> RegistryResult<User> {
        let mut state = self.write();
        let index = state.position(id).ok_or(RegistryError::NotFound { id })?;

        let valid = input.validate().inspect_err(|e| {
            debug!(user_id = id, reason = %e, "Rejected user update");
        })?;

        if state.email_taken(&valid.email, Some(id)) {
            debug!(user_id = id, email = %valid.email, "Rejected user update: duplicate email");
            return Err(ValidationError::EmailTakenByOther.into());
        }

        let user = &mut state.users[index];
        user.name = valid.name;
        user.email = valid.email;

        info!(user_id = id, "User updated");
        Ok(user.clone())
    }

    /// Remove a user. The remaining users keep their order; the id is never reused.
    pub fn delete(&self, id: u64) -> RegistryResult<()> {
        let mut state = self.write();
        let index = state.position(id).ok_or(RegistryError::NotFound { id })?;
        state.users.remove(index);

        info!(user_id = id, "User deleted");
        Ok(())
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(registry: &UserRegistry) -> Vec<u64> {
        registry.list().iter().map(|u| u.id).collect()
    }

    #[test]
    fn seeded_registry_lists_fixtures_in_order() {
        let registry = UserRegistry::seeded();
        let users = registry.list();
        assert_eq!(ids(&registry), vec![1, 2, 3]);
        assert_eq!(users[0].name, "Anna Julia Higa Farincho");
        assert_eq!(users[1].email, "leticia.macedo@email.com");
        assert_eq!(users[2].name, "Evelyn Mercês");
    }

    #[test]
    fn list_is_repeatable_without_mutation() {
        let registry = UserRegistry::seeded();
        assert_eq!(registry.list(), registry.list());
    }

    #[test]
    fn create_assigns_next_id_and_appends() {
        let registry = UserRegistry::seeded();
        let user = registry
            .create(&UserInput::new("Maria Silva", "maria@x.com"))
            .unwrap();

        assert_eq!(user, User::new(4, "Maria Silva", "maria@x.com"));
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.list().last(), Some(&user));
    }

    #[test]
    fn create_then_get_returns_equal_record() {
        let registry = UserRegistry::new();
        let created = registry.create(&UserInput::new(" Ana ", " ana@x.com ")).unwrap();
        assert_eq!(registry.get(created.id).unwrap(), created);
        assert_eq!(created.name, "Ana");
        assert_eq!(created.email, "ana@x.com");
    }

    #[test]
    fn empty_registry_starts_at_one() {
        let registry = UserRegistry::new();
        assert!(registry.is_empty());
        let user = registry.create(&UserInput::new("Ana", "ana@x.com")).unwrap();
        assert_eq!(user.id, 1);
    }

    #[test]
    fn with_users_continues_after_highest_id() {
        let registry = UserRegistry::with_users(vec![
            User::new(7, "A", "a@x.com"),
            User::new(2, "B", "b@x.com"),
        ]);
        let user = registry.create(&UserInput::new("C", "c@x.com")).unwrap();
        assert_eq!(user.id, 8);
        assert_eq!(ids(&registry), vec![7, 2, 8]);
    }

    #[test]
    fn create_rejects_duplicate_email_case_insensitively() {
        let registry = UserRegistry::seeded();
        let err = registry
            .create(&UserInput::new("Ana", "  ANNA.julia@email.com "))
            .unwrap_err();
        assert_eq!(err, RegistryError::Validation(ValidationError::DuplicateEmail));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn create_rejects_empty_and_missing_fields() {
        let registry = UserRegistry::seeded();
        assert_eq!(
            registry.create(&UserInput::new("", "a@b.com")),
            Err(ValidationError::EmptyField.into())
        );
        assert_eq!(
            registry.create(&UserInput::default()),
            Err(ValidationError::MissingField.into())
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn failed_create_does_not_consume_an_id() {
        let registry = UserRegistry::seeded();
        registry.create(&UserInput::new("", "a@b.com")).unwrap_err();
        let user = registry.create(&UserInput::new("Ana", "a@b.com")).unwrap();
        assert_eq!(user.id, 4);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let registry = UserRegistry::seeded();
        assert_eq!(registry.get(99), Err(RegistryError::NotFound { id: 99 }));
    }

    #[test]
    fn update_changes_fields_in_place() {
        let registry = UserRegistry::seeded();
        let updated = registry
            .update(2, &UserInput::new("Léa Macedo", "nova@x.com"))
            .unwrap();

        assert_eq!(updated, User::new(2, "Léa Macedo", "nova@x.com"));
        assert_eq!(registry.get(2).unwrap(), updated);
        assert_eq!(ids(&registry), vec![1, 2, 3]);
    }

    #[test]
    fn update_may_keep_own_email_in_other_casing() {
        let registry = UserRegistry::seeded();
        let updated = registry
            .update(1, &UserInput::new("Anna", "ANNA.JULIA@email.com"))
            .unwrap();
        assert_eq!(updated.email, "ANNA.JULIA@email.com");
    }

    #[test]
    fn update_rejects_email_of_another_user() {
        let registry = UserRegistry::seeded();
        let err = registry
            .update(1, &UserInput::new("Anna", "Evelyn.Merces@email.com"))
            .unwrap_err();
        assert_eq!(err, ValidationError::EmailTakenByOther.into());
        assert_eq!(err.to_string(), "Email já está em uso por outro usuário");
        assert_eq!(registry.get(1).unwrap().email, "anna.julia@email.com");
    }

    #[test]
    fn update_checks_existence_before_input() {
        let registry = UserRegistry::seeded();
        assert_eq!(
            registry.update(42, &UserInput::default()),
            Err(RegistryError::NotFound { id: 42 })
        );
        assert_eq!(
            registry.update(1, &UserInput::new(" ", "x@y.com")),
            Err(ValidationError::EmptyField.into())
        );
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let registry = UserRegistry::seeded();
        registry.delete(2).unwrap();

        assert_eq!(ids(&registry), vec![1, 3]);
        assert_eq!(registry.get(2), Err(RegistryError::NotFound { id: 2 }));
        assert_eq!(registry.delete(2), Err(RegistryError::NotFound { id: 2 }));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let registry = UserRegistry::seeded();
        registry.delete(3).unwrap();
        assert_eq!(registry.get(3), Err(RegistryError::NotFound { id: 3 }));
        assert_eq!(ids(&registry), vec![1, 2]);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let registry = UserRegistry::seeded();
        let first = registry.create(&UserInput::new("A", "a@x.com")).unwrap();
        registry.delete(first.id).unwrap();
        registry.delete(3).unwrap();

        let second = registry.create(&UserInput::new("B", "b@x.com")).unwrap();
        assert!(second.id > first.id);
        assert_eq!(second.id, 5);
    }

    #[test]
    fn deleted_email_becomes_available() {
        let registry = UserRegistry::seeded();
        registry.delete(1).unwrap();
        let user = registry
            .create(&UserInput::new("Anna", "anna.julia@email.com"))
            .unwrap();
        assert_eq!(user.id, 4);
    }

    #[test]
    fn concurrent_creates_keep_ids_and_emails_unique() {
        let registry = UserRegistry::new().shared();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        // Every worker races for the same shared address too.
                        let _ = registry.create(&UserInput::new("Shared", "shared@x.com"));
                        registry
                            .create(&UserInput::new("U", format!("w{worker}-{i}@x.com")))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let users = registry.list();
        assert_eq!(users.len(), 8 * 25 + 1);

        let mut ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), users.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let mut emails: Vec<String> = users.iter().map(|u| normalize_email(&u.email)).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), users.len());
    }
}
