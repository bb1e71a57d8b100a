//! # plugin-lifecycle
//!
//! Administration client for cloud director UI plugins and API extension
//! services.
//!
//! ## Features
//!
//! - **XML mapping**: convert the admin API's XML query results into a
//!   `Scalar | Object | Array` value and on into typed records
//! - **Batched actions**: enable, disable, delete, re-scope and publish many
//!   entities at once, with confirmations and a disable-before-delete
//!   remediation
//! - **Two endpoint families**: XML extension services and JSON UI plugins
//!   behind one [`EntityBackend`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plugin_lifecycle::{
//!     ApiExtensionService, AutoConfirm, BatchOrchestrator, ClientConfig, Transition, VcdClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_file("plugin-lifecycle.yaml").await?;
//!     let service = ApiExtensionService::new(VcdClient::new(&config)?);
//!
//!     let mut orchestrator = BatchOrchestrator::new(service, AutoConfirm);
//!     orchestrator.load().await?;
//!     orchestrator.select(&["gcp-ticketing"])?;
//!
//!     let outcome = orchestrator.run(Transition::Disable).await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::ClientConfig;
pub use core::batch::{
    AutoConfirm, BatchOrchestrator, BatchOutcome, BatchReport, BatchState, ConfirmationPort,
    EntityBackend, ModalOptions, ModalResponse, Transition,
};
pub use core::entity::{AdminServiceRecord, EntityKind, ManagedEntity, Scope, UiPlugin};
pub use core::xml::{XmlValue, convert, convert_str, parse_document};
pub use services::{ApiExtensionService, UiPluginService, VcdClient};
pub use utils::error::{LifecycleError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.version, self.git_hash, self.rust_version
        )
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
