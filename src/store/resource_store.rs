//! Resource Store Module
//!
//! Ordered in-memory collection of resources plus the id counter.

use tracing::error;

use crate::error::{ApiError, Result};
use crate::store::{NewResource, Resource, ResourceUpdate};

// == Resource Store ==
/// Holds every resource in insertion order.
///
/// Ids are handed out from a counter that only moves forward, so the backing
/// vector is always sorted by id. Deleted ids are never handed out again.
#[derive(Debug)]
pub struct ResourceStore {
    /// Records in insertion order
    resources: Vec<Resource>,
    /// Id assigned to the next appended record
    next_id: u64,
}

impl ResourceStore {
    // == Constructor ==
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding the two sample resources (ids 1 and 2).
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        for (name, description) in [
            ("Resource 1", "First resource"),
            ("Resource 2", "Second resource"),
        ] {
            if let Err(err) = store.append(NewResource::new(name, description)) {
                error!("Failed to seed sample resource '{}': {}", name, err);
            }
        }
        store
    }

    // == Append ==
    /// Assigns the next id, stamps `created_at` and pushes the record.
    ///
    /// Fails without touching the store if the id counter is exhausted.
    pub fn append(&mut self, new: NewResource) -> Result<Resource> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(|| {
            ApiError::Internal("Failed to create resource: identifier space exhausted".to_string())
        })?;

        let resource = Resource::new(id, new);
        self.resources.push(resource.clone());
        self.next_id = next_id;
        Ok(resource)
    }

    // == List ==
    /// Returns all records in insertion order.
    pub fn list(&self) -> &[Resource] {
        &self.resources
    }

    // == Find ==
    /// Looks up a record by id.
    pub fn find_by_id(&self, id: u64) -> Option<&Resource> {
        self.position_of(id).map(|index| &self.resources[index])
    }

    /// Returns the index of the record with the given id.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.resources
            .binary_search_by_key(&id, |resource| resource.id)
            .ok()
    }

    // == Replace ==
    /// Applies `update` to the record at `index` and refreshes `updated_at`.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn replace_at(&mut self, index: usize, update: ResourceUpdate) -> Option<&Resource> {
        let resource = self.resources.get_mut(index)?;
        resource.apply(update);
        Some(resource)
    }

    // == Remove ==
    /// Removes and returns the record at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Option<Resource> {
        if index < self.resources.len() {
            Some(self.resources.remove(index))
        } else {
            None
        }
    }

    // == Length ==
    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Id the next appended record will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    #[cfg(test)]
    pub(crate) fn with_next_id(next_id: u64) -> Self {
        Self {
            resources: Vec::new(),
            next_id,
        }
    }
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::new()
    }
}
