//! Users module — user CRUD backed by the in-memory registry

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
