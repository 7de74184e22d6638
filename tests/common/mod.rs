//! Shared fixtures for the wiremock integration tests

#![allow(dead_code)]

use pbi::{Dataset, Group, PowerBiClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const API_ROOT: &str = "/v1.0/myorg";

pub const GROUP_ID: &str = "f089354e-8366-4e18-aea3-4cb4a3a50b48";
pub const MARKETING_GROUP_ID: &str = "3d9b93c6-7b6d-4801-a491-1738910904fd";
pub const DATASET_ID: &str = "cfafbeb1-8037-4d0c-896e-a46fb27ff229";

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> PowerBiClient {
    PowerBiClient::with_base_url(TOKEN, &format!("{}{}", server.uri(), API_ROOT))
        .expect("mock client should build")
}

/// Full request path below the API root
pub fn api_path(path: &str) -> String {
    format!("{}/{}", API_ROOT, path)
}

pub fn marketing_group() -> Group {
    Group::new(MARKETING_GROUP_ID, "marketing group")
}

pub fn sales_marketing_json(is_refreshable: bool) -> Value {
    json!({
        "id": DATASET_ID,
        "name": "SalesMarketing",
        "addRowsAPIEnabled": false,
        "configuredBy": "john@contoso.com",
        "isRefreshable": is_refreshable,
        "isEffectiveIdentityRequired": true,
        "isEffectiveIdentityRolesRequired": true,
        "isOnPremGatewayRequired": false
    })
}

pub fn sales_marketing(is_refreshable: bool) -> Dataset {
    Dataset::from_raw(&sales_marketing_json(is_refreshable))
}

pub fn refresh_history_json() -> Value {
    json!({
        "value": [
            {
                "refreshType": "ViaApi",
                "startTime": "2017-06-13T09:25:43.153Z",
                "endTime": "2017-06-13T09:31:43.153Z",
                "status": "Completed",
                "requestId": "9399bb89-25d1-44f8-8576-136d7e9014b1"
            },
            {
                "refreshType": "ViaApi",
                "startTime": "2017-06-13T09:25:43.153Z",
                "endTime": "2017-06-13T09:31:43.153Z",
                "serviceExceptionJson": "{\"errorCode\":\"ModelRefreshFailed_CredentialsNotSpecified\"}",
                "status": "Failed",
                "requestId": "11bf290a-346b-48b7-8973-c5df149337ff"
            }
        ]
    })
}

pub fn dataset_users_json() -> Value {
    json!({
        "value": [
            {
                "identifier": "john@contoso.com",
                "principalType": "User",
                "datasetUserAccessRight": "Read"
            },
            {
                "identifier": "154aef10-47b8-48c4-ab97-f0bf9d5f8fcf",
                "principalType": "Group",
                "datasetUserAccessRight": "ReadReshare"
            },
            {
                "identifier": "3d9b93c6-7b6d-4801-a491-1738910904fd",
                "principalType": "App",
                "datasetUserAccessRight": "ReadWriteReshareExplore"
            }
        ]
    })
}
