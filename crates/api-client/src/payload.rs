//! Request payloads: required fields plus an optional overlay
//!
//! Every endpoint takes a fixed set of required fields and a set of optional
//! ones. Optional fields are merged on top of the required ones, and a key that
//! is already required is rejected instead of being overwritten.

use crate::error::{ApiError, ApiResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// JSON object sent as a request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Start from the required fields of a call.
    ///
    /// `required` must serialize to a JSON object.
    pub fn from_required<R: Serialize>(required: &R) -> ApiResult<Self> {
        Ok(Self {
            fields: to_object(required)?,
        })
    }

    /// Merge optional fields on top.
    ///
    /// `null` values are dropped. A key that is already present fails with
    /// [`ApiError::FieldCollision`].
    pub fn with_optional<O: Serialize>(mut self, optional: &O) -> ApiResult<Self> {
        for (key, value) in to_object(optional)? {
            if value.is_null() {
                continue;
            }
            if self.fields.contains_key(&key) {
                return Err(ApiError::FieldCollision { key });
            }
            self.fields.insert(key, value);
        }
        Ok(self)
    }

    /// Merge optional fields when present.
    pub fn with_optional_opt<O: Serialize>(self, optional: Option<&O>) -> ApiResult<Self> {
        match optional {
            Some(optional) => self.with_optional(optional),
            None => Ok(self),
        }
    }

    /// Look up a field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the payload has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to the exact body string that is signed and sent.
    pub fn to_body_string(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

fn to_object<T: Serialize>(value: &T) -> ApiResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ApiError::InvalidPayload("null")),
        Value::Bool(_) => Err(ApiError::InvalidPayload("a boolean")),
        Value::Number(_) => Err(ApiError::InvalidPayload("a number")),
        Value::String(_) => Err(ApiError::InvalidPayload("a string")),
        Value::Array(_) => Err(ApiError::InvalidPayload("an array")),
    }
}
