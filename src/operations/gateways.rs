//! Gateway operations

use super::{get_list, get_one};
use crate::api::client::{segment, PowerBiClient};
use crate::error::Result;
use crate::models::{Gateway, ResourceRef};

/// Operations on gateways, reached through [`PowerBiClient::gateways`]
#[derive(Clone, Copy)]
pub struct Gateways<'c> {
    client: &'c PowerBiClient,
}

impl<'c> Gateways<'c> {
    pub(crate) fn new(client: &'c PowerBiClient) -> Self {
        Self { client }
    }

    /// Get a gateway the caller administers
    pub async fn get_gateway<'a>(
        &self,
        gateway: impl Into<ResourceRef<'a, Gateway>>,
    ) -> Result<Gateway> {
        let gateway_id = gateway.into().require_id()?;
        let url = self.client.url(&format!("gateways/{}", segment(gateway_id)));
        get_one(self.client, &url).await
    }

    /// List the gateways the caller administers
    pub async fn get_gateways(&self) -> Result<Vec<Gateway>> {
        get_list(self.client, &self.client.url("gateways")).await
    }
}
