//! Power BI API interaction module
//!
//! # Module Structure
//!
//! - [`client`] - Main client holding the token and building URLs
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```no_run
//! use pbi::PowerBiClient;
//!
//! async fn example() -> pbi::Result<()> {
//!     let client = PowerBiClient::new("eyJ0eXAi...")?;
//!     let raw = client.get(&client.url("datasets")).await?;
//!     println!("{}", raw);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
