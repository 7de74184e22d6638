//! Tile operations
//!
//! Tiles only exist inside a dashboard, so every call takes the parent
//! dashboard as well.

use super::{get_list, get_one};
use crate::api::client::{segment, PowerBiClient};
use crate::error::Result;
use crate::models::{Dashboard, Group, ResourceRef, Tile};

/// Operations on dashboard tiles, reached through [`PowerBiClient::tiles`]
#[derive(Clone, Copy)]
pub struct Tiles<'c> {
    client: &'c PowerBiClient,
}

impl<'c> Tiles<'c> {
    pub(crate) fn new(client: &'c PowerBiClient) -> Self {
        Self { client }
    }

    pub async fn get_tile<'a>(
        &self,
        dashboard: impl Into<ResourceRef<'a, Dashboard>>,
        tile: impl Into<ResourceRef<'a, Tile>>,
    ) -> Result<Tile> {
        let dashboard_id = dashboard.into().require_id()?;
        let tile_id = tile.into().require_id()?;
        let url = self.tiles_url(None, dashboard_id, Some(tile_id));
        get_one(self.client, &url).await
    }

    pub async fn get_tile_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
        dashboard: impl Into<ResourceRef<'a, Dashboard>>,
        tile: impl Into<ResourceRef<'a, Tile>>,
    ) -> Result<Tile> {
        let group_id = group.into().require_id()?;
        let dashboard_id = dashboard.into().require_id()?;
        let tile_id = tile.into().require_id()?;
        let url = self.tiles_url(Some(group_id), dashboard_id, Some(tile_id));
        get_one(self.client, &url).await
    }

    pub async fn get_tiles<'a>(
        &self,
        dashboard: impl Into<ResourceRef<'a, Dashboard>>,
    ) -> Result<Vec<Tile>> {
        let dashboard_id = dashboard.into().require_id()?;
        get_list(self.client, &self.tiles_url(None, dashboard_id, None)).await
    }

    pub async fn get_tiles_in_group<'a>(
        &self,
        group: impl Into<ResourceRef<'a, Group>>,
        dashboard: impl Into<ResourceRef<'a, Dashboard>>,
    ) -> Result<Vec<Tile>> {
        let group_id = group.into().require_id()?;
        let dashboard_id = dashboard.into().require_id()?;
        get_list(self.client, &self.tiles_url(Some(group_id), dashboard_id, None)).await
    }

    /// `[groups/{g}/]dashboards/{d}/tiles[/{t}]`
    fn tiles_url(&self, group_id: Option<&str>, dashboard_id: &str, tile_id: Option<&str>) -> String {
        let mut path = format!("dashboards/{}/tiles", segment(dashboard_id));
        if let Some(tile_id) = tile_id {
            path.push('/');
            path.push_str(&segment(tile_id));
        }
        self.client.scoped_url(group_id, &path)
    }
}
