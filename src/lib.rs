//! Resource API - A small REST service over an in-memory resource store
//!
//! Provides create, list, get, update and delete operations on resources,
//! with request validation and structured JSON errors.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::ApiError;
pub use store::{Resource, ResourceStore};
