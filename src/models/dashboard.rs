//! Dashboards

use super::{array_field, bool_field, id_field, str_field};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub display_name: Option<String>,
    pub app_id: Option<String>,
    pub embed_url: Option<String>,
    pub is_read_only: Option<bool>,
    pub web_url: Option<String>,
    pub data_classification: Option<String>,
    pub users: Option<Vec<Value>>,
    pub subscriptions: Option<Vec<Value>>,
}

impl From<&Value> for Dashboard {
    fn from(value: &Value) -> Self {
        Self {
            id: id_field(value, "id"),
            display_name: str_field(value, "displayName"),
            app_id: str_field(value, "appId"),
            embed_url: str_field(value, "embedUrl"),
            is_read_only: bool_field(value, "isReadOnly"),
            web_url: str_field(value, "webUrl"),
            data_classification: str_field(value, "dataClassification"),
            users: array_field(value, "users"),
            subscriptions: array_field(value, "subscriptions"),
        }
    }
}

entity!(Dashboard, "dashboard");
