//! API Handlers
//!
//! HTTP request handlers for the resource endpoints. Each handler runs the
//! relevant validation checks first and only then takes the store lock, so
//! a rejected request never mutates anything.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::Value;
use tracing::info;

use super::validation::{validate_creation, validate_id, validate_update};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{DeleteResponse, HealthResponse, ListQuery, ListResponse};
use crate::store::{sort_resources, Resource, ResourceStore};

/// Application state shared across all handlers.
///
/// Every store mutation, including the id increment, happens under a single
/// write guard.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe resource store
    pub store: Arc<RwLock<ResourceStore>>,
    /// Title shown on the index page
    pub title: Arc<str>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: ResourceStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            title: Config::default().app_title.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Seeds the store with sample resources when configured to.
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_sample_data {
            ResourceStore::with_samples()
        } else {
            ResourceStore::new()
        };
        Self {
            store: Arc::new(RwLock::new(store)),
            title: config.app_title.as_str().into(),
        }
    }
}

/// Handler for POST /api/resources
///
/// Creates a resource and returns it with 201 Created.
pub async fn create_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Resource>)> {
    let Json(body) = body?;
    let new = validate_creation(&body)?;

    let resource = state.store.write().await.append(new)?;
    info!(id = resource.id, "Resource created");

    Ok((StatusCode::CREATED, Json(resource)))
}

/// Handler for GET /api/resources
///
/// Lists all resources, optionally sorted by `sortBy` and `order`.
pub async fn list_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>> {
    let Query(query) = query?;
    let sorting = query.sorting()?;

    let (mut data, total) = {
        let store = state.store.read().await;
        (store.list().to_vec(), store.len())
    };

    if let Some((field, order)) = sorting {
        sort_resources(&mut data, field, order);
    }

    Ok(Json(ListResponse::new(data, total)))
}

/// Handler for GET /api/resources/:id
pub async fn get_handler(
    State(state): State<AppState>,
    raw_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Resource>> {
    let Path(raw_id) = raw_id?;
    let id = validate_id(&raw_id)?;

    let store = state.store.read().await;
    let resource = store.find_by_id(id).cloned().ok_or_else(|| ApiError::not_found(id))?;

    Ok(Json(resource))
}

/// Handler for PUT /api/resources/:id
///
/// Applies a partial update and returns the updated resource.
pub async fn update_handler(
    State(state): State<AppState>,
    raw_id: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Resource>> {
    let Path(raw_id) = raw_id?;
    let id = validate_id(&raw_id)?;
    let Json(body) = body?;
    let update = validate_update(&body)?;

    let mut store = state.store.write().await;
    let index = store.position_of(id).ok_or_else(|| ApiError::not_found(id))?;
    let resource = store
        .replace_at(index, update)
        .cloned()
        .ok_or_else(|| ApiError::not_found(id))?;
    info!(id, "Resource updated");

    Ok(Json(resource))
}

/// Handler for DELETE /api/resources/:id
///
/// Removes a resource and returns it in the `deleted` field.
pub async fn delete_handler(
    State(state): State<AppState>,
    raw_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>> {
    let Path(raw_id) = raw_id?;
    let id = validate_id(&raw_id)?;

    let mut store = state.store.write().await;
    let index = store.position_of(id).ok_or_else(|| ApiError::not_found(id))?;
    let deleted = store.remove_at(index).ok_or_else(|| ApiError::not_found(id))?;
    info!(id, "Resource deleted");

    Ok(Json(DeleteResponse::new(deleted)))
}

/// Handler for GET /
///
/// Renders the index page with the configured title.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let title = escape_html(&state.title);
    Html(format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <title>{title}</title>\n  </head>\n  <body>\n    <h1>{title}</h1>\n    <p>Welcome to {title}</p>\n    <p><a href=\"/api/resources\">Browse resources</a></p>\n  </body>\n</html>\n"
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
