//! Workspace operations

use super::get_list;
use crate::api::client::{add_query_params, segment, PowerBiClient};
use crate::error::{Error, Result};
use crate::models::{Group, GroupUser, ResourceRef};
use serde_json::json;

/// Operations on workspaces, reached through [`PowerBiClient::groups`]
#[derive(Clone, Copy)]
pub struct Groups<'c> {
    client: &'c PowerBiClient,
}

impl<'c> Groups<'c> {
    pub(crate) fn new(client: &'c PowerBiClient) -> Self {
        Self { client }
    }

    /// List the workspaces the caller can access, optionally narrowed by
    /// an OData `$filter` (e.g. `contains(name,'sales')`) and `$top`
    pub async fn get_groups(&self, filter: Option<&str>, top: Option<u32>) -> Result<Vec<Group>> {
        let url = add_query_params(
            &self.client.url("groups"),
            &[
                ("$filter", filter.map(str::to_string)),
                ("$top", top.map(|t| t.to_string())),
            ],
        );
        get_list(self.client, &url).await
    }

    /// Members of a workspace
    pub async fn get_group_users<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
    ) -> Result<Vec<GroupUser>> {
        let group_id = group.into().require_id()?;
        get_list(self.client, &self.client.group_url(group_id, "users")).await
    }

    /// Create a new workspace
    pub async fn create_group(&self, name: &str) -> Result<Group> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("workspace name is empty".to_string()));
        }

        let url = add_query_params(
            &self.client.url("groups"),
            &[("workspaceV2", Some("True".to_string()))],
        );
        let body = json!({ "name": name });

        tracing::info!("Creating workspace '{}'", name);
        let response = self.client.post(&url, Some(&body)).await?;
        Ok(Group::from(&response))
    }

    /// Delete a workspace
    pub async fn delete_group<'a>(&self, group: impl Into<ResourceRef<'a, Group>>) -> Result<()> {
        let group_id = group.into().require_id()?;
        let url = self.client.url(&format!("groups/{}", segment(group_id)));

        tracing::info!("Deleting workspace {}", group_id);
        self.client.delete(&url).await?;
        Ok(())
    }

    /// Fetch a single workspace by id. The API has no direct endpoint, so
    /// this filters the group list on `id`. Ids compare case-insensitively,
    /// the service returns lowercase GUIDs.
    pub async fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        let filter = format!("id eq '{}'", group_id.replace('\'', "''"));
        let groups = self.get_groups(Some(&filter), Some(1)).await?;
        Ok(groups
            .into_iter()
            .find(|g| g.id.eq_ignore_ascii_case(group_id)))
    }
}
