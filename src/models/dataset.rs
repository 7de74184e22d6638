//! Datasets and their access lists

use super::{array_field, bool_field, id_field, list_field, str_field};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A Power BI dataset (semantic model)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "addRowsAPIEnabled")]
    pub add_rows_api_enabled: Option<bool>,
    pub configured_by: Option<String>,
    pub created_date: Option<String>,
    pub description: Option<String>,
    pub is_refreshable: Option<bool>,
    pub is_effective_identity_required: Option<bool>,
    pub is_effective_identity_roles_required: Option<bool>,
    pub is_on_prem_gateway_required: Option<bool>,
    pub target_storage_mode: Option<String>,
    pub web_url: Option<String>,
    #[serde(rename = "createReportEmbedURL")]
    pub create_report_embed_url: Option<String>,
    #[serde(rename = "qnaEmbedURL")]
    pub qna_embed_url: Option<String>,
    pub upstream_datasets: Option<Vec<Value>>,
    pub users: Option<Vec<DatasetUserAccess>>,
}

impl From<&Value> for Dataset {
    fn from(value: &Value) -> Self {
        Self {
            id: id_field(value, "id"),
            name: str_field(value, "name"),
            add_rows_api_enabled: bool_field(value, "addRowsAPIEnabled"),
            configured_by: str_field(value, "configuredBy"),
            created_date: str_field(value, "createdDate"),
            description: str_field(value, "description"),
            is_refreshable: bool_field(value, "isRefreshable"),
            is_effective_identity_required: bool_field(value, "isEffectiveIdentityRequired"),
            is_effective_identity_roles_required: bool_field(
                value,
                "isEffectiveIdentityRolesRequired",
            ),
            is_on_prem_gateway_required: bool_field(value, "isOnPremGatewayRequired"),
            target_storage_mode: str_field(value, "targetStorageMode"),
            web_url: str_field(value, "webUrl"),
            create_report_embed_url: str_field(value, "createReportEmbedURL"),
            qna_embed_url: str_field(value, "qnaEmbedURL"),
            upstream_datasets: array_field(value, "upstreamDatasets"),
            users: list_field(value, "users"),
        }
    }
}

entity!(Dataset, "dataset");

impl Dataset {
    /// Whether the service reports this dataset as refreshable.
    /// An absent flag counts as not refreshable.
    pub fn refreshable(&self) -> bool {
        self.is_refreshable == Some(true)
    }

    /// Creation time, when present and well-formed
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_date.as_deref().and_then(parse_timestamp)
    }
}

/// One principal's access right on a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetUserAccess {
    pub identifier: String,
    pub principal_type: Option<String>,
    pub dataset_user_access_right: Option<String>,
}

impl From<&Value> for DatasetUserAccess {
    fn from(value: &Value) -> Self {
        Self {
            identifier: id_field(value, "identifier"),
            principal_type: str_field(value, "principalType"),
            dataset_user_access_right: str_field(value, "datasetUserAccessRight"),
        }
    }
}

/// Upstream dataflow a dataset in a workspace reads from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetToDataflowLink {
    pub dataset_object_id: Option<String>,
    pub dataflow_object_id: Option<String>,
    pub workspace_object_id: Option<String>,
}

impl From<&Value> for DatasetToDataflowLink {
    fn from(value: &Value) -> Self {
        Self {
            dataset_object_id: str_field(value, "datasetObjectId"),
            dataflow_object_id: str_field(value, "dataflowObjectId"),
            workspace_object_id: str_field(value, "workspaceObjectId"),
        }
    }
}

/// Parse an ISO-8601 timestamp as returned by the service
pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sales_marketing() -> Value {
        json!({
            "id": "cfafbeb1-8037-4d0c-896e-a46fb27ff229",
            "name": "SalesMarketing",
            "addRowsAPIEnabled": false,
            "configuredBy": "john@contoso.com",
            "isRefreshable": true,
            "isEffectiveIdentityRequired": true,
            "isEffectiveIdentityRolesRequired": true,
            "isOnPremGatewayRequired": false,
            "createdDate": "2017-06-13T09:25:43.153Z"
        })
    }

    #[test]
    fn test_dataset_from_raw() {
        let dataset = Dataset::from_raw(&sales_marketing());

        assert_eq!(dataset.id, "cfafbeb1-8037-4d0c-896e-a46fb27ff229");
        assert_eq!(dataset.name.as_deref(), Some("SalesMarketing"));
        assert_eq!(dataset.add_rows_api_enabled, Some(false));
        assert_eq!(dataset.configured_by.as_deref(), Some("john@contoso.com"));
        assert!(dataset.refreshable());
        assert_eq!(dataset.is_effective_identity_required, Some(true));
        assert_eq!(dataset.is_effective_identity_roles_required, Some(true));
        assert_eq!(dataset.is_on_prem_gateway_required, Some(false));
    }

    #[test]
    fn test_dataset_missing_keys_are_none() {
        let dataset = Dataset::from_raw(&sales_marketing());

        assert_eq!(dataset.target_storage_mode, None);
        assert_eq!(dataset.upstream_datasets, None);
        assert_eq!(dataset.users, None);
        assert_eq!(dataset.web_url, None);
    }

    #[test]
    fn test_dataset_empty_collections_are_kept() {
        let mut raw = sales_marketing();
        raw["upstreamDatasets"] = json!([]);
        raw["users"] = json!([{"identifier": "john@contoso.com", "datasetUserAccessRight": "Read"}]);

        let dataset = Dataset::from_raw(&raw);
        assert_eq!(dataset.upstream_datasets, Some(vec![]));
        let users = dataset.users.unwrap();
        assert_eq!(users[0].identifier, "john@contoso.com");
        assert_eq!(users[0].principal_type, None);
    }

    #[test]
    fn test_refreshable_requires_explicit_true() {
        let mut raw = sales_marketing();
        raw.as_object_mut().unwrap().remove("isRefreshable");
        assert!(!Dataset::from_raw(&raw).refreshable());

        raw["isRefreshable"] = json!(false);
        assert!(!Dataset::from_raw(&raw).refreshable());
    }

    #[test]
    fn test_created_at() {
        let dataset = Dataset::from_raw(&sales_marketing());
        let created = dataset.created_at().unwrap();
        assert_eq!(created.to_rfc3339(), "2017-06-13T09:25:43.153+00:00");

        let mut raw = sales_marketing();
        raw["createdDate"] = json!("yesterday");
        assert_eq!(Dataset::from_raw(&raw).created_at(), None);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let dataset = Dataset::from_raw(&sales_marketing());
        let out = serde_json::to_value(&dataset).unwrap();

        assert_eq!(out["addRowsAPIEnabled"], json!(false));
        assert_eq!(out["isOnPremGatewayRequired"], json!(false));
        assert_eq!(out["targetStorageMode"], Value::Null);
        assert_eq!(Dataset::from_raw(&out), dataset);
    }

    #[test]
    fn test_dataflow_link_from_raw() {
        let link = DatasetToDataflowLink::from(&json!({
            "datasetObjectId": "cfafbeb1-8037-4d0c-896e-a46fb27ff229",
            "dataflowObjectId": "928228ba-008d-4fd9-864a-92d2752ee5ce",
            "workspaceObjectId": "f089354e-8366-4e18-aea3-4cb4a3a50b48"
        }));
        assert_eq!(
            link.workspace_object_id.as_deref(),
            Some("f089354e-8366-4e18-aea3-4cb4a3a50b48")
        );
    }
}
