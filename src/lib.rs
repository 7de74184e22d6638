//! Typed client for the Power BI REST API.
//!
//! Raw JSON payloads are mapped into entities ([`Dataset`], [`Report`],
//! [`Dashboard`], [`Tile`], [`Group`], [`Gateway`], [`Refresh`], [`App`], ...)
//! and every operation accepts either a raw identifier or a previously
//! fetched entity.
//!
//! ```no_run
//! use pbi::{Group, PowerBiClient};
//!
//! # async fn example() -> pbi::Result<()> {
//! let client = PowerBiClient::new("eyJ0eXAi...")?;
//!
//! let group = Group::new("f089354e-8366-4e18-aea3-4cb4a3a50b48", "Sales");
//! for dataset in client.datasets().get_datasets_in_group(&group).await? {
//!     if dataset.refreshable() {
//!         let history = client.datasets().get_refresh_history(&dataset, Some(5)).await?;
//!         println!("{}: {} refreshes", dataset.id, history.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Token acquisition is out of scope: pass an Azure AD access token for the
//! `https://analysis.windows.net/powerbi/api` resource.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;

pub use api::client::{PowerBiClient, DEFAULT_BASE_URL};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{
    App, Dashboard, Dataset, DatasetToDataflowLink, DatasetUserAccess, Gateway, GatewayPublicKey,
    Group, GroupUser, Identified, NotifyOption, Refresh, Report, ResourceRef, Tile,
};
