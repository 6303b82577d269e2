//! User aggregate
//!
//! Contains the User entity and the input validation rules.

pub mod input;
pub mod model;

pub use input::{UserInput, ValidUserInput};
pub use model::{normalize_email, User};

pub use crate::domain::error::ValidationError;
