//! Fixture users loaded into a fresh registry.

use crate::domain::User;

/// The three users every seeded registry starts with (ids 1–3).
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Anna Julia Higa Farincho", "anna.julia@email.com"),
        User::new(2, "Letícia Macedo", "leticia.macedo@email.com"),
        User::new(3, "Evelyn Mercês", "evelyn.merces@email.com"),
    ]
}
