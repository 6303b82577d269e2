//! Info module — static service metadata

pub mod handlers;

pub use handlers::*;
