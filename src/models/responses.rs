//! Response DTOs for the resource API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::store::Resource;

/// Response body for the list operation (GET /api/resources)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Resources in the requested order
    pub data: Vec<Resource>,
    /// Collection counts
    pub metadata: ListMetadata,
}

/// Counts attached to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetadata {
    /// Number of records in the store
    pub total: usize,
    /// Number of records returned
    pub count: usize,
}

impl ListResponse {
    /// Creates a ListResponse; `total` is the full store size.
    pub fn new(data: Vec<Resource>, total: usize) -> Self {
        let count = data.len();
        Self {
            data,
            metadata: ListMetadata { total, count },
        }
    }
}

/// Response body for the delete operation (DELETE /api/resources/:id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The record as it was before removal
    pub deleted: Resource,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(deleted: Resource) -> Self {
        Self {
            message: "Resource deleted successfully".to_string(),
            deleted,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category, e.g. "Validation failed"
    pub error: String,
    /// Human readable detail
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{NewResource, ResourceStore};

    fn widget() -> Resource {
        let mut store = ResourceStore::new();
        store.append(NewResource::new("Widget", "")).unwrap()
    }

    #[test]
    fn test_list_response_metadata() {
        let resp = ListResponse::new(vec![widget(), widget()], 2);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["metadata"]["total"], 2);
        assert_eq!(json["metadata"]["count"], 2);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new(widget());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["message"], "Resource deleted successfully");
        assert_eq!(json["deleted"]["name"], "Widget");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Not found", "Resource with ID 4 not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"], "Not found");
        assert_eq!(json["message"], "Resource with ID 4 not found");
    }
}
