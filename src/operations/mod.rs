//! Operation groups
//!
//! One façade per resource family, borrowed from a [`PowerBiClient`]:
//!
//! - [`Datasets`] - datasets, refresh history, dataset users
//! - [`Groups`] - workspaces and their members
//! - [`Reports`], [`Dashboards`], [`Tiles`] - content
//! - [`Gateways`] - on-premises data gateways
//! - [`Apps`] - installed apps and their content
//!
//! Each method resolves its `ResourceRef` arguments to ids, builds the path,
//! issues a single request and maps the body through [`crate::models`].
//!
//! [`PowerBiClient`]: crate::PowerBiClient

mod apps;
mod dashboards;
mod datasets;
mod gateways;
mod groups;
mod reports;
mod tiles;

pub use apps::Apps;
pub use dashboards::Dashboards;
pub use datasets::Datasets;
pub use gateways::Gateways;
pub use groups::Groups;
pub use reports::Reports;
pub use tiles::Tiles;

use crate::api::client::PowerBiClient;
use crate::error::Result;
use crate::models::from_value_list;
use serde_json::Value;

/// GET a single object and map it
async fn get_one<T>(client: &PowerBiClient, url: &str) -> Result<T>
where
    T: for<'v> From<&'v Value>,
{
    let response = client.get(url).await?;
    Ok(T::from(&response))
}

/// GET a collection and map its `value` array
async fn get_list<T>(client: &PowerBiClient, url: &str) -> Result<Vec<T>>
where
    T: for<'v> From<&'v Value>,
{
    let response = client.get(url).await?;
    let items: Vec<T> = from_value_list(&response);
    tracing::debug!("{} items from {}", items.len(), url);
    Ok(items)
}
