//! Workspaces (groups) and their members

use super::{bool_field, id_field, list_field, str_field};
use serde::Serialize;
use serde_json::Value;

/// A Power BI workspace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: Option<String>,
    pub is_read_only: Option<bool>,
    pub is_on_dedicated_capacity: Option<bool>,
    pub capacity_id: Option<String>,
    pub dataflow_storage_id: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    pub state: Option<String>,
    pub users: Option<Vec<GroupUser>>,
}

impl From<&Value> for Group {
    fn from(value: &Value) -> Self {
        Self {
            id: id_field(value, "id"),
            name: str_field(value, "name"),
            is_read_only: bool_field(value, "isReadOnly"),
            is_on_dedicated_capacity: bool_field(value, "isOnDedicatedCapacity"),
            capacity_id: str_field(value, "capacityId"),
            dataflow_storage_id: str_field(value, "dataflowStorageId"),
            description: str_field(value, "description"),
            group_type: str_field(value, "type"),
            state: str_field(value, "state"),
            users: list_field(value, "users"),
        }
    }
}

entity!(Group, "group");

impl Group {
    /// A group known only by id and name, e.g. from configuration
    pub fn new(id: &str, name: &str) -> Self {
        Self::from_raw(&serde_json::json!({ "id": id, "name": name }))
    }
}

/// A principal with access to a workspace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUser {
    pub identifier: String,
    pub email_address: Option<String>,
    pub display_name: Option<String>,
    pub group_user_access_right: Option<String>,
    pub principal_type: Option<String>,
    pub graph_id: Option<String>,
}

impl From<&Value> for GroupUser {
    fn from(value: &Value) -> Self {
        Self {
            identifier: id_field(value, "identifier"),
            email_address: str_field(value, "emailAddress"),
            display_name: str_field(value, "displayName"),
            group_user_access_right: str_field(value, "groupUserAccessRight"),
            principal_type: str_field(value, "principalType"),
            graph_id: str_field(value, "graphId"),
        }
    }
}
