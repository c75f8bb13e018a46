//! API Module
//!
//! HTTP handlers, validation and routing for the resource REST API.
//!
//! # Endpoints
//! - `POST /api/resources` - Create a resource
//! - `GET /api/resources` - List resources
//! - `GET /api/resources/:id` - Fetch one resource
//! - `PUT /api/resources/:id` - Update a resource
//! - `DELETE /api/resources/:id` - Delete a resource
//! - `GET /` - Index page
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;
pub mod validation;

pub use handlers::*;
pub use routes::create_router;
