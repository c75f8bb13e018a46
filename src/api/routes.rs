//! API Routes
//!
//! Configures the Axum router with all resource API endpoints.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::handlers::{
    create_handler, delete_handler, get_handler, health_handler, index_handler, list_handler,
    update_handler, AppState,
};
use crate::error::ApiError;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Index page
/// - `GET /health` - Health check endpoint
/// - `POST /api/resources` - Create a resource
/// - `GET /api/resources` - List resources (`sortBy`, `order`)
/// - `GET /api/resources/:id` - Fetch one resource
/// - `PUT /api/resources/:id` - Update a resource
/// - `DELETE /api/resources/:id` - Delete a resource
///
/// # Middleware
/// - Panic catching: a panicking handler yields a 500 error body
/// - CORS: Allows any origin so a browser client can be served elsewhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    let api = Router::new()
        .route("/resources", get(list_handler).post(create_handler))
        .route(
            "/resources/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        );

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turns a handler panic into the standard 500 error body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = detail, "Handler panicked");

    ApiError::Internal("Failed to process request".to_string()).into_response()
}
