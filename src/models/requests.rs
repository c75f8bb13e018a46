//! Request DTOs for the resource API
//!
//! Create and update bodies arrive as raw JSON and go through
//! [`crate::api::validation`]; only the list query has a typed shape.

use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::store::{SortField, SortOrder};

/// Query string for the list operation (GET /api/resources)
///
/// # Fields
/// - `sortBy`: Optional field to sort by (id, name, description, createdAt)
/// - `order`: Optional direction, `asc` (default) or `desc`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Field to sort by
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Sort direction
    #[serde(default)]
    pub order: Option<String>,
}

impl ListQuery {
    /// Resolves the requested ordering.
    ///
    /// Returns `None` when no (or an empty) `sortBy` was given, meaning
    /// insertion order.
    pub fn sorting(&self) -> Result<Option<(SortField, SortOrder)>> {
        let sort_by = match self.sort_by.as_deref() {
            None | Some("") => return Ok(None),
            Some(sort_by) => sort_by,
        };

        let field = sort_by
            .parse::<SortField>()
            .map_err(ApiError::InvalidParameter)?;
        Ok(Some((field, SortOrder::from_query(self.order.as_deref()))))
    }
}
