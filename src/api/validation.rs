//! Request Validation
//!
//! Checks run before a handler touches the store. Each returns the parsed
//! value on success or the 400 error to send back.

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::store::{NewResource, ResourceUpdate};

/// Maximum length of a resource name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

const NAME_REQUIRED: &str = "Name is required and must be a non-empty string";
const NAME_TOO_LONG: &str = "Name must be 100 characters or less";
const NAME_INVALID: &str = "Name must be a non-empty string with 100 characters or less";
const DESCRIPTION_INVALID: &str = "Description must be a string";
const NOTHING_TO_UPDATE: &str = "At least one field (name or description) must be provided";

// == Creation Check ==
/// Validates a creation body and returns the trimmed fields.
///
/// `name` must be a string that is non-empty once trimmed and at most
/// [`MAX_NAME_LENGTH`] characters. `description` is optional.
pub fn validate_creation(body: &Value) -> Result<NewResource> {
    let name = match field(body, "name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::Validation(NAME_REQUIRED.to_string())),
    };
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ApiError::Validation(NAME_TOO_LONG.to_string()));
    }

    let description = optional_description(body)?.unwrap_or_default();
    Ok(NewResource::new(name.trim(), description))
}

// == Update Check ==
/// Validates an update body. At least one of `name` or `description` must be
/// present; a present `name` follows the same rules as on creation.
pub fn validate_update(body: &Value) -> Result<ResourceUpdate> {
    // An empty string counts as provided: `{"description": ""}` clears the
    // description, while `{"name": ""}` is rejected by the name rule below.
    if field(body, "name").is_none() && field(body, "description").is_none() {
        return Err(ApiError::Validation(NOTHING_TO_UPDATE.to_string()));
    }

    let name = match field(body, "name") {
        None => None,
        Some(Value::String(name)) if is_valid_name(name) => Some(name.trim().to_string()),
        Some(_) => return Err(ApiError::Validation(NAME_INVALID.to_string())),
    };

    Ok(ResourceUpdate {
        name,
        description: optional_description(body)?,
    })
}

// == Identifier Check ==
/// Parses a path identifier, which must be a run of ASCII digits worth at
/// least 1. Signs are not accepted.
///
/// A positive integer too large for `u64` is well formed but can never have
/// been assigned, so it is reported as not found rather than invalid.
pub fn validate_id(raw: &str) -> Result<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId);
    }

    match raw.parse::<u64>() {
        Ok(0) => Err(ApiError::InvalidId),
        Ok(id) => Ok(id),
        Err(_) => Err(ApiError::not_found(raw.trim_start_matches('0'))),
    }
}

/// Looks up a body field, treating JSON `null` as absent.
fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| !value.is_null())
}

fn optional_description(body: &Value) -> Result<Option<String>> {
    match field(body, "description") {
        None => Ok(None),
        Some(Value::String(description)) => Ok(Some(description.trim().to_string())),
        Some(_) => Err(ApiError::Validation(DESCRIPTION_INVALID.to_string())),
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= MAX_NAME_LENGTH
}
