//! Resource Module
//!
//! Defines the resource record and the validated inputs that create or
//! modify one.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};

// == Resource ==
/// A single resource record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Store-assigned identifier, never reused
    pub id: u64,
    /// Trimmed, non-empty display name
    pub name: String,
    /// Trimmed description, empty when not provided
    pub description: String,
    /// Creation time
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Time of the last successful update
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource {
    /// Builds a fresh record stamped with the current time.
    pub(crate) fn new(id: u64, new: NewResource) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            created_at: now(),
            updated_at: None,
        }
    }

    /// Applies the present fields of `update` and refreshes `updated_at`.
    pub(crate) fn apply(&mut self, update: ResourceUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.updated_at = Some(now());
    }
}

// == Validated Inputs ==
/// Fields for a resource about to be created. Values are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub name: String,
    pub description: String,
}

impl NewResource {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Fields to change on an existing resource; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

// == Timestamps ==
/// Current UTC time truncated to milliseconds, the precision we serialize.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn serialize_timestamp<S: Serializer>(
    ts: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn serialize_optional_timestamp<S: Serializer>(
    ts: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => serialize_timestamp(ts, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_serialize_camel_case_without_updated_at() {
        let resource = Resource::new(1, NewResource::new("Widget", ""));
        let json: Value = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["description"], "");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_timestamp_format_is_iso_millis() {
        let resource = Resource::new(1, NewResource::new("Widget", ""));
        let json: Value = serde_json::to_value(&resource).unwrap();
        let created = json["createdAt"].as_str().unwrap();

        // e.g. 2024-05-01T12:00:00.123Z
        assert_eq!(created.len(), 24);
        assert!(created.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut resource = Resource::new(1, NewResource::new("Widget", "old"));
        let created_at = resource.created_at;

        resource.apply(ResourceUpdate {
            name: None,
            description: Some("new".to_string()),
        });

        assert_eq!(resource.name, "Widget");
        assert_eq!(resource.description, "new");
        assert_eq!(resource.created_at, created_at);
        assert!(resource.updated_at.is_some());
    }

    #[test]
    fn test_deserialize_roundtrip_keeps_timestamps() {
        let mut resource = Resource::new(3, NewResource::new("Gadget", "d"));
        resource.apply(ResourceUpdate::default());

        let text = serde_json::to_string(&resource).unwrap();
        let parsed: Resource = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, resource);
    }
}
