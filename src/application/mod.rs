//! Application layer: the user registry and its fixture data.

pub mod registry;
pub mod seed;

pub use registry::{SharedUserRegistry, UserRegistry};
pub use seed::seed_users;
