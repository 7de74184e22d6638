//! App operations

use super::{get_list, get_one};
use crate::api::client::{segment, PowerBiClient};
use crate::error::Result;
use crate::models::{App, Dashboard, Report, ResourceRef};

/// Operations on installed apps, reached through [`PowerBiClient::apps`]
#[derive(Clone, Copy)]
pub struct Apps<'c> {
    client: &'c PowerBiClient,
}

impl<'c> Apps<'c> {
    pub(crate) fn new(client: &'c PowerBiClient) -> Self {
        Self { client }
    }

    pub async fn get_app<'a>(&self, app: impl Into<ResourceRef<'a, App>>) -> Result<App> {
        let app_id = app.into().require_id()?;
        get_one(self.client, &self.app_url(app_id, "")).await
    }

    pub async fn get_apps(&self) -> Result<Vec<App>> {
        get_list(self.client, &self.client.url("apps")).await
    }

    pub async fn get_reports_in_app<'a>(
        &self,
        app: impl Into<ResourceRef<'a, App>>,
    ) -> Result<Vec<Report>> {
        let app_id = app.into().require_id()?;
        get_list(self.client, &self.app_url(app_id, "/reports")).await
    }

    pub async fn get_dashboards_in_app<'a>(
        &self,
        app: impl Into<ResourceRef<'a, App>>,
    ) -> Result<Vec<Dashboard>> {
        let app_id = app.into().require_id()?;
        get_list(self.client, &self.app_url(app_id, "/dashboards")).await
    }

    fn app_url(&self, app_id: &str, suffix: &str) -> String {
        self.client.url(&format!("apps/{}{}", segment(app_id), suffix))
    }
}
