//! UI plugin metadata

use super::{EntityKind, ManagedEntity, Scope};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// UI plugin as returned by `/cloudapi/extensions/ui` (`UiPluginMetadataResponse`).
///
/// Fields the client does not model are kept in `extra` so that an update
/// sends back everything the server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPlugin {
    pub id: String,
    #[serde(rename = "pluginName")]
    pub plugin_name: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub tenant_scoped: bool,
    #[serde(default)]
    pub provider_scoped: bool,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_status: Option<String>,
    #[serde(
        default,
        rename = "resourcePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UiPlugin {
    /// Copy with `enabled` set to the requested value
    pub fn with_enabled(&self, enabled: bool) -> Self {
        Self {
            enabled,
            ..self.clone()
        }
    }

    /// Copy with the scope flags replaced
    pub fn with_scope(&self, scope: Scope) -> Self {
        Self {
            provider_scoped: scope.service_provider,
            tenant_scoped: scope.tenant,
            ..self.clone()
        }
    }
}

impl ManagedEntity for UiPlugin {
    const KIND: EntityKind = EntityKind::UiPlugin;

    fn key(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.plugin_name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn scope(&self) -> Option<Scope> {
        Some(Scope::new(self.provider_scoped, self.tenant_scoped))
    }
}
