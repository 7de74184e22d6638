//! Reports

use super::{array_field, bool_field, id_field, str_field};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: Option<String>,
    pub app_id: Option<String>,
    pub dataset_id: Option<String>,
    pub description: Option<String>,
    pub is_owned_by_me: Option<bool>,
    pub web_url: Option<String>,
    pub embed_url: Option<String>,
    pub report_type: Option<String>,
    pub original_report_id: Option<String>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub created_date_time: Option<String>,
    pub modified_date_time: Option<String>,
    pub users: Option<Vec<Value>>,
    pub subscriptions: Option<Vec<Value>>,
}

impl From<&Value> for Report {
    fn from(value: &Value) -> Self {
        Self {
            id: id_field(value, "id"),
            name: str_field(value, "name"),
            app_id: str_field(value, "appId"),
            dataset_id: str_field(value, "datasetId"),
            description: str_field(value, "description"),
            is_owned_by_me: bool_field(value, "isOwnedByMe"),
            web_url: str_field(value, "webUrl"),
            embed_url: str_field(value, "embedUrl"),
            report_type: str_field(value, "reportType"),
            original_report_id: str_field(value, "originalReportId"),
            created_by: str_field(value, "createdBy"),
            modified_by: str_field(value, "modifiedBy"),
            created_date_time: str_field(value, "createdDateTime"),
            modified_date_time: str_field(value, "modifiedDateTime"),
            users: array_field(value, "users"),
            subscriptions: array_field(value, "subscriptions"),
        }
    }
}

entity!(Report, "report");
