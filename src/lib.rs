//! Minimal authenticated client for the Jamf Pro REST API.
//!
//! [`JamfClient`] acquires a bearer token over HTTP Basic auth
//! (`POST /api/v1/auth/token`), caches it for the lifetime of the instance,
//! and issues GET/POST/PUT requests under the `/JSSResource` namespace.
//! Success is exactly HTTP 200 or 201; everything else fails with a
//! [`JamfError`] carrying the status code. There is no retry, pooling,
//! pagination, or rate-limiting layer.
//!
//! # Example
//! ```no_run
//! use jamf_client::{JamfClient, JamfConfig};
//!
//! # async fn example() -> Result<(), jamf_client::JamfError> {
//! let config = JamfConfig::new("admin", "hunter2", "https://jss.example.com", "json")?;
//! let client = JamfClient::new(config)?;
//!
//! client.get_token().await?;
//! let computer = client.get("/computers/id/1").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;

pub use client::{JamfClient, ResourceBody};
pub use config::{Format, JamfConfig};
pub use errors::{JamfError, JamfResult};
