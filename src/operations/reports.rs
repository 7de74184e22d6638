//! Report operations

use super::{get_list, get_one};
use crate::api::client::{segment, PowerBiClient};
use crate::error::Result;
use crate::models::{Group, Report, ResourceRef};

/// Operations on reports, reached through [`PowerBiClient::reports`]
#[derive(Clone, Copy)]
pub struct Reports<'c> {
    client: &'c PowerBiClient,
}

impl<'c> Reports<'c> {
    pub(crate) fn new(client: &'c PowerBiClient) -> Self {
        Self { client }
    }

    /// Get a report from "My workspace"
    pub async fn get_report<'a>(&self, report: impl Into<ResourceRef<'a, Report>>) -> Result<Report> {
        let report_id = report.into().require_id()?;
        let url = self.client.url(&format!("reports/{}", segment(report_id)));
        get_one(self.client, &url).await
    }

    /// Get a report from a workspace
    pub async fn get_report_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
        report: impl Into<ResourceRef<'a, Report>>,
    ) -> Result<Report> {
        let group_id = group.into().require_id()?;
        let report_id = report.into().require_id()?;
        let url = self
            .client
            .group_url(group_id, &format!("reports/{}", segment(report_id)));
        get_one(self.client, &url).await
    }

    /// List the reports in "My workspace"
    pub async fn get_reports(&self) -> Result<Vec<Report>> {
        get_list(self.client, &self.client.url("reports")).await
    }

    /// List the reports in a workspace
    pub async fn get_reports_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
    ) -> Result<Vec<Report>> {
        let group_id = group.into().require_id()?;
        get_list(self.client, &self.client.group_url(group_id, "reports")).await
    }
}
