//! Sort Module
//!
//! Orderings available to the list endpoint.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::store::Resource;

// == Sort Field ==
/// Resource field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Description,
    CreatedAt,
}

impl SortField {
    /// Every accepted field, in the order they are advertised.
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::Name,
        SortField::Description,
        SortField::CreatedAt,
    ];

    /// Query-string spelling of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Description => "description",
            SortField::CreatedAt => "createdAt",
        }
    }

    /// Compares two resources on this field in ascending order.
    ///
    /// Strings compare lexicographically, ids numerically and creation
    /// times chronologically.
    pub fn compare(self, a: &Resource, b: &Resource) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Description => a.description.cmp(&b.description),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }

    /// Comma separated list of accepted spellings.
    pub fn accepted() -> String {
        Self::ALL
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("sortBy must be one of: {}", Self::accepted()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Sort Order ==
/// Direction of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Reads the `order` query value. Anything other than `desc` is ascending.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

// == Sort ==
/// Stable in-place sort of `resources` on `field` in the given direction.
pub fn sort_resources(resources: &mut [Resource], field: SortField, order: SortOrder) {
    resources.sort_by(|a, b| match order {
        SortOrder::Asc => field.compare(a, b),
        SortOrder::Desc => field.compare(b, a),
    });
}
