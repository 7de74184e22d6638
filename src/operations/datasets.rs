//! Dataset operations

use super::{get_list, get_one};
use crate::api::client::{add_query_params, segment, PowerBiClient};
use crate::error::{Error, Result};
use crate::models::{
    Dataset, DatasetToDataflowLink, DatasetUserAccess, Group, NotifyOption, Refresh, ResourceRef,
};
use serde_json::json;

/// Operations on datasets, reached through [`PowerBiClient::datasets`]
#[derive(Clone, Copy)]
pub struct Datasets<'c> {
    client: &'c PowerBiClient,
}

impl<'c> Datasets<'c> {
    pub(crate) fn new(client: &'c PowerBiClient) -> Self {
        Self { client }
    }

    /// Get a dataset from "My workspace"
    pub async fn get_dataset<'a>(
        &self,
        dataset: impl Into<ResourceRef<'a, Dataset>>,
    ) -> Result<Dataset> {
        let dataset_id = dataset.into().require_id()?;
        let url = self.dataset_url(None, dataset_id, "");
        get_one(self.client, &url).await
    }

    /// Get a dataset from a workspace
    pub async fn get_dataset_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
        dataset: impl Into<ResourceRef<'a, Dataset>>,
    ) -> Result<Dataset> {
        let group_id = group.into().require_id()?;
        let dataset_id = dataset.into().require_id()?;
        let url = self.dataset_url(Some(group_id), dataset_id, "");
        get_one(self.client, &url).await
    }

    /// List the datasets in "My workspace"
    pub async fn get_datasets(&self) -> Result<Vec<Dataset>> {
        get_list(self.client, &self.client.url("datasets")).await
    }

    /// List the datasets in a workspace
    pub async fn get_datasets_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
    ) -> Result<Vec<Dataset>> {
        let group_id = group.into().require_id()?;
        get_list(self.client, &self.client.group_url(group_id, "datasets")).await
    }

    /// Refresh history of a dataset in "My workspace", newest first.
    ///
    /// Given a bare id, the dataset is fetched first to read its
    /// `isRefreshable` flag. Fails with [`Error::NotRefreshable`] when the
    /// dataset cannot be refreshed; the history is not requested then.
    pub async fn get_refresh_history<'a>(
        &self,
        dataset: impl Into<ResourceRef<'a, Dataset>>,
        top: Option<u32>,
    ) -> Result<Vec<Refresh>> {
        self.refresh_history(None, dataset.into(), top).await
    }

    /// Refresh history of a dataset in a workspace. Same rules as
    /// [`Datasets::get_refresh_history`].
    pub async fn get_refresh_history_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
        dataset: impl Into<ResourceRef<'a, Dataset>>,
        top: Option<u32>,
    ) -> Result<Vec<Refresh>> {
        let group_id = group.into().require_id()?;
        self.refresh_history(Some(group_id), dataset.into(), top)
            .await
    }

    async fn refresh_history(
        &self,
        group_id: Option<&str>,
        dataset: ResourceRef<'_, Dataset>,
        top: Option<u32>,
    ) -> Result<Vec<Refresh>> {
        let dataset_id = dataset.require_id()?;

        let refreshable = match dataset.entity() {
            Some(entity) => entity.refreshable(),
            None => {
                let url = self.dataset_url(group_id, dataset_id, "");
                let fetched: Dataset = get_one(self.client, &url).await?;
                fetched.refreshable()
            },
        };

        if !refreshable {
            tracing::warn!("Refresh history requested for non-refreshable dataset {}", dataset_id);
            return Err(Error::NotRefreshable {
                dataset_id: dataset_id.to_string(),
            });
        }

        let url = add_query_params(
            &self.dataset_url(group_id, dataset_id, "/refreshes"),
            &[("$top", top.map(|t| t.to_string()))],
        );
        get_list(self.client, &url).await
    }

    /// Trigger a refresh of a dataset in "My workspace". The service
    /// accepts the request (202) and runs it asynchronously.
    pub async fn refresh_dataset<'a>(
        &self,
        dataset: impl Into<ResourceRef<'a, Dataset>>,
        notify: NotifyOption,
    ) -> Result<()> {
        let dataset_id = dataset.into().require_id()?;
        let url = self.dataset_url(None, dataset_id, "/refreshes");
        let body = json!({ "notifyOption": notify.as_str() });

        tracing::info!("Triggering refresh of dataset {}", dataset_id);
        self.client.post(&url, Some(&body)).await?;
        Ok(())
    }

    /// Upstream dataflow links of every dataset in a workspace
    pub async fn get_dataset_to_dataflow_links_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
    ) -> Result<Vec<DatasetToDataflowLink>> {
        let group_id = group.into().require_id()?;
        let url = self.client.group_url(group_id, "datasets/upstreamDataflows");
        get_list(self.client, &url).await
    }

    /// Principals with access to a dataset in "My workspace"
    pub async fn get_dataset_users<'a>(
        &self,
        dataset: impl Into<ResourceRef<'a, Dataset>>,
    ) -> Result<Vec<DatasetUserAccess>> {
        let dataset_id = dataset.into().require_id()?;
        get_list(self.client, &self.dataset_url(None, dataset_id, "/users")).await
    }

    /// Principals with access to a dataset in a workspace
    pub async fn get_dataset_users_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
        dataset: impl Into<ResourceRef<'a, Dataset>>,
    ) -> Result<Vec<DatasetUserAccess>> {
        let group_id = group.into().require_id()?;
        let dataset_id = dataset.into().require_id()?;
        let url = self.dataset_url(Some(group_id), dataset_id, "/users");
        get_list(self.client, &url).await
    }

    /// `[groups/{g}/]datasets/{id}{suffix}`
    fn dataset_url(&self, group_id: Option<&str>, dataset_id: &str, suffix: &str) -> String {
        self.client
            .scoped_url(group_id, &format!("datasets/{}{}", segment(dataset_id), suffix))
    }
}
