//! # User Registry
//!
//! Minimal user-management service: an in-memory, insertion-ordered
//! registry of users exposed through a REST API.
//!
//! ## Architecture
//!
//! - **domain**: the `User` entity, input validation and error types
//! - **application**: the `UserRegistry` owning all records and the id counter
//! - **interfaces**: REST API (axum) with Swagger documentation
//! - **config**: TOML configuration
//! - **server**: runtime wiring, tracing setup and graceful shutdown
//! - **shared**: shutdown signalling

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::{SharedUserRegistry, UserRegistry};
pub use domain::{RegistryError, RegistryResult, User, UserInput, ValidationError};

// Re-export API router
pub use interfaces::http::{create_api_router, RouterOptions};
