//! HTTP REST API interfaces
//!
//! - `common`: response bodies, extractors and `ApiError`
//! - `modules`: handlers per resource (users, info, metrics) and middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use common::{ApiError, ErrorResponse, MessageResponse};
pub use router::{create_api_router, ApiDoc, RouterOptions};
