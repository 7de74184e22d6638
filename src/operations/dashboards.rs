//! Dashboard operations

use super::{get_list, get_one};
use crate::api::client::{segment, PowerBiClient};
use crate::error::Result;
use crate::models::{Dashboard, Group, ResourceRef};

/// Operations on dashboards, reached through [`PowerBiClient::dashboards`]
#[derive(Clone, Copy)]
pub struct Dashboards<'c> {
    client: &'c PowerBiClient,
}

impl<'c> Dashboards<'c> {
    pub(crate) fn new(client: &'c PowerBiClient) -> Self {
        Self { client }
    }

    pub async fn get_dashboard<'a>(
        &self,
        dashboard: impl Into<ResourceRef<'a, Dashboard>>,
    ) -> Result<Dashboard> {
        let dashboard_id = dashboard.into().require_id()?;
        let url = self.client.url(&format!("dashboards/{}", segment(dashboard_id)));
        get_one(self.client, &url).await
    }

    pub async fn get_dashboard_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
        dashboard: impl Into<ResourceRef<'a, Dashboard>>,
    ) -> Result<Dashboard> {
        let group_id = group.into().require_id()?;
        let dashboard_id = dashboard.into().require_id()?;
        let url = self
            .client
            .group_url(group_id, &format!("dashboards/{}", segment(dashboard_id)));
        get_one(self.client, &url).await
    }

    pub async fn get_dashboards(&self) -> Result<Vec<Dashboard>> {
        get_list(self.client, &self.client.url("dashboards")).await
    }

    pub async fn get_dashboards_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
    ) -> Result<Vec<Dashboard>> {
        let group_id = group.into().require_id()?;
        get_list(self.client, &self.client.group_url(group_id, "dashboards")).await
    }
}
