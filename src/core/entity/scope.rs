//! Plugin publication scope

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope name used by the UI for the service-provider portal
pub const SERVICE_PROVIDER: &str = "service-provider";
/// Scope name used by the UI for tenant portals
pub const TENANT: &str = "tenant";

/// Where a UI plugin is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scope {
    pub service_provider: bool,
    pub tenant: bool,
}

impl Scope {
    pub fn new(service_provider: bool, tenant: bool) -> Self {
        Self {
            service_provider,
            tenant,
        }
    }

    /// Build a scope from UI scope names such as `["service-provider", "tenant"]`
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            service_provider: names.iter().any(|n| n.as_ref() == SERVICE_PROVIDER),
            tenant: names.iter().any(|n| n.as_ref() == TENANT),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.service_provider, self.tenant) {
            (true, true) => write!(f, "{} and {}", SERVICE_PROVIDER, TENANT),
            (true, false) => write!(f, "{}", SERVICE_PROVIDER),
            (false, true) => write!(f, "{}", TENANT),
            (false, false) => write!(f, "no portal"),
        }
    }
}
