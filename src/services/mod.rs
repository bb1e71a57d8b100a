//! Services module
//!
//! HTTP access to the management API: a shared client plus one
//! [`EntityBackend`](crate::core::batch::EntityBackend) per endpoint family.

mod api_extension;
mod http;
mod ui_plugin;

pub use api_extension::{ApiExtensionService, QUERY_PATH, SERVICE_CONTENT_TYPE, service_document};
pub use http::{AUTH_HEADER, VcdClient, error_message};
pub use ui_plugin::{UI_PLUGINS_PATH, UiPluginService};
