//! BambooHR Client - employee directory and record lookups
//!
//! `EmployeeClient` turns directory and employee queries into GET requests
//! against a configured base URL. The actual HTTP call is delegated to a
//! [`RequestExecutor`]; [`ReqwestExecutor`] is the network implementation.
//!
//! ```ignore
//! use bamboo_client::{ClientConfig, EmployeeClient, EmployeeField};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = ClientConfig::for_company("acme").with_api_key("secret");
//! let client = EmployeeClient::from_config(&config)?;
//! let cancel = CancellationToken::new();
//!
//! let directory = client.employee_directory(&cancel).await?;
//! let jane = client
//!     .employee_by_email(&cancel, "jane@acme.com", [EmployeeField::JobTitle])
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod executor;

pub use client::EmployeeClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use executor::{RequestExecutor, ReqwestExecutor};

// Re-export shared types for convenience
pub use shared::{Employee, EmployeeDirectory, EmployeeField, EmployeeFields};
pub use tokio_util::sync::CancellationToken;
