//! Store Module
//!
//! In-memory resource storage and the orderings used when listing it.

mod resource;
mod resource_store;
mod sort;


// Re-export public types
pub use resource::{NewResource, Resource, ResourceUpdate};
pub use resource_store::ResourceStore;
pub use sort::{sort_resources, SortField, SortOrder};
