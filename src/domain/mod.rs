//! Domain layer: the user entity, its validation rules and error types.

pub mod error;
pub mod user;

pub use error::{RegistryError, RegistryResult, ValidationError};
pub use user::{normalize_email, User, UserInput, ValidUserInput};
