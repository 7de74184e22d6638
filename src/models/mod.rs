//! Entity mapping layer
//!
//! Every entity is built from one decoded JSON object with
//! `From<&serde_json::Value>`. Keys missing from the payload, or present
//! with an unexpected JSON type, become `None`; identifiers default to an
//! empty string. Mapping never fails.
//!
//! Relationships between entities are plain identifier strings
//! (`Tile::report_id`, `Report::dataset_id`, ...).

/// Wire up `Identified`, `from_raw` and entity-to-`ResourceRef` conversion
macro_rules! entity {
    ($ty:ident, $kind:literal) => {
        impl $crate::models::Identified for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }
        }

        impl<'a> From<&'a $ty> for $crate::models::ResourceRef<'a, $ty> {
            fn from(entity: &'a $ty) -> Self {
                $crate::models::ResourceRef::Entity(entity)
            }
        }

        impl $ty {
            /// Build from a raw API payload
            pub fn from_raw(raw: &serde_json::Value) -> Self {
                Self::from(raw)
            }
        }
    };
}

mod app;
mod dashboard;
mod dataset;
mod gateway;
mod group;
mod refresh;
mod report;
mod tile;

pub use app::App;
pub use dashboard::Dashboard;
pub use dataset::{Dataset, DatasetToDataflowLink, DatasetUserAccess};
pub use gateway::{Gateway, GatewayPublicKey};
pub use group::{Group, GroupUser};
pub use refresh::{NotifyOption, Refresh};
pub use report::Report;
pub use tile::Tile;

use crate::error::{Error, Result};
use serde_json::Value;

/// An entity with a service-assigned identifier
pub trait Identified {
    /// Name used in error messages
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// A resource addressed either by its raw id or by a previously fetched entity.
///
/// Operation methods take `impl Into<ResourceRef<'_, T>>`, so both
/// `"f089354e-..."` and `&group` are accepted and build the same request.
#[derive(Debug)]
pub enum ResourceRef<'a, T> {
    Id(&'a str),
    Entity(&'a T),
}

impl<T> Clone for ResourceRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceRef<'_, T> {}

impl<'a, T: Identified> ResourceRef<'a, T> {
    /// The identifier this reference resolves to
    pub fn id(&self) -> &'a str {
        match *self {
            ResourceRef::Id(id) => id,
            ResourceRef::Entity(entity) => entity.id(),
        }
    }

    /// The entity, when one was supplied instead of a raw id
    pub fn entity(&self) -> Option<&'a T> {
        match *self {
            ResourceRef::Id(_) => None,
            ResourceRef::Entity(entity) => Some(entity),
        }
    }

    /// Resolve to a non-empty identifier
    pub(crate) fn require_id(&self) -> Result<&'a str> {
        let id = self.id();
        if id.trim().is_empty() {
            return Err(Error::MissingId { resource: T::KIND });
        }
        Ok(id)
    }
}

impl<'a, T> From<&'a str> for ResourceRef<'a, T> {
    fn from(id: &'a str) -> Self {
        ResourceRef::Id(id)
    }
}

impl<'a, T> From<&'a String> for ResourceRef<'a, T> {
    fn from(id: &'a String) -> Self {
        ResourceRef::Id(id.as_str())
    }
}

// =============================================================================
// Raw field access
// =============================================================================

pub(crate) fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

pub(crate) fn id_field(raw: &Value, key: &str) -> String {
    str_field(raw, key).unwrap_or_default()
}

pub(crate) fn bool_field(raw: &Value, key: &str) -> Option<bool> {
    raw.get(key).and_then(|v| v.as_bool())
}

pub(crate) fn int_field(raw: &Value, key: &str) -> Option<i64> {
    raw.get(key).and_then(|v| v.as_i64())
}

/// A nested array kept as raw JSON
pub(crate) fn array_field(raw: &Value, key: &str) -> Option<Vec<Value>> {
    raw.get(key).and_then(|v| v.as_array()).cloned()
}

/// A nested array of entities
pub(crate) fn list_field<T>(raw: &Value, key: &str) -> Option<Vec<T>>
where
    T: for<'v> From<&'v Value>,
{
    raw.get(key)
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().map(T::from).collect())
}

/// Map the `value` array of a list response. A missing or malformed
/// `value` yields an empty list.
pub fn from_value_list<T>(response: &Value) -> Vec<T>
where
    T: for<'v> From<&'v Value>,
{
    list_field(response, "value").unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_helpers_coerce_wrong_types_to_none() {
        let raw = json!({"name": 5, "flag": "true", "count": "3", "items": {}});
        assert_eq!(str_field(&raw, "name"), None);
        assert_eq!(bool_field(&raw, "flag"), None);
        assert_eq!(int_field(&raw, "count"), None);
        assert_eq!(array_field(&raw, "items"), None);
        assert_eq!(id_field(&raw, "id"), "");
    }

    #[test]
    fn test_from_value_list() {
        let response = json!({"value": [{"id": "a"}, {"id": "b"}]});
        let groups: Vec<Group> = from_value_list(&response);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].id, "b");

        let empty: Vec<Group> = from_value_list(&json!({"odata.context": "x"}));
        assert!(empty.is_empty());
        let empty: Vec<Group> = from_value_list(&Value::Null);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_resource_ref_from_id_and_entity_agree() {
        let group = Group::from_raw(&json!({"id": "3d9b93c6-7b6d-4801-a491-1738910904fd"}));
        let by_entity: ResourceRef<'_, Group> = (&group).into();
        let by_id: ResourceRef<'_, Group> = "3d9b93c6-7b6d-4801-a491-1738910904fd".into();

        assert_eq!(by_entity.id(), by_id.id());
        assert!(by_entity.entity().is_some());
        assert!(by_id.entity().is_none());
    }

    #[test]
    fn test_require_id_rejects_empty() {
        let group = Group::from_raw(&json!({"name": "no id"}));
        let r: ResourceRef<'_, Group> = (&group).into();
        assert!(matches!(
            r.require_id(),
            Err(Error::MissingId { resource: "group" })
        ));
    }
}
