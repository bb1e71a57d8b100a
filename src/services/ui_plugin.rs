//! UI plugins (`/cloudapi/extensions/ui`)

use super::http::VcdClient;
use crate::core::batch::{EntityBackend, Transition};
use crate::core::entity::{Scope, UiPlugin};
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Collection endpoint for UI plugin metadata
pub const UI_PLUGINS_PATH: &str = "/cloudapi/extensions/ui";

/// UI plugins exposed by the cloudapi
#[derive(Debug, Clone)]
pub struct UiPluginService {
    client: VcdClient,
}

impl UiPluginService {
    pub fn new(client: VcdClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &VcdClient {
        &self.client
    }

    fn plugin_path(id: &str) -> String {
        format!("{}/{}", UI_PLUGINS_PATH, id)
    }

    pub async fn list(&self) -> Result<Vec<UiPlugin>> {
        let plugins: Vec<UiPlugin> = self.client.get_json(UI_PLUGINS_PATH).await?;
        debug!(count = plugins.len(), "Listed UI plugins");
        Ok(plugins)
    }

    /// Send the plugin's metadata back with `enabled` set to `enabled`
    pub async fn set_enabled(&self, plugin: &UiPlugin, enabled: bool) -> Result<()> {
        info!(plugin = %plugin.plugin_name, enabled, "Updating UI plugin");
        self.client
            .put_json(&Self::plugin_path(&plugin.id), &plugin.with_enabled(enabled))
            .await
    }

    pub async fn change_scope(&self, plugin: &UiPlugin, scope: Scope) -> Result<()> {
        info!(plugin = %plugin.plugin_name, %scope, "Changing UI plugin scope");
        self.client
            .put_json(&Self::plugin_path(&plugin.id), &plugin.with_scope(scope))
            .await
    }

    pub async fn publish_all(&self, plugin: &UiPlugin) -> Result<()> {
        info!(plugin = %plugin.plugin_name, "Publishing UI plugin to all tenants");
        self.client
            .post(&format!("{}/tenants/publishAll", Self::plugin_path(&plugin.id)))
            .await
    }

    pub async fn unpublish_all(&self, plugin: &UiPlugin) -> Result<()> {
        info!(plugin = %plugin.plugin_name, "Unpublishing UI plugin from all tenants");
        self.client
            .post(&format!("{}/tenants/unpublishAll", Self::plugin_path(&plugin.id)))
            .await
    }

    pub async fn delete(&self, plugin: &UiPlugin) -> Result<()> {
        info!(plugin = %plugin.plugin_name, "Deleting UI plugin");
        self.client
            .delete_json(&Self::plugin_path(&plugin.id))
            .await
    }
}

#[async_trait]
impl EntityBackend for UiPluginService {
    type Entity = UiPlugin;

    async fn list(&self) -> Result<Vec<UiPlugin>> {
        UiPluginService::list(self).await
    }

    fn supports(&self, _transition: &Transition) -> bool {
        true
    }

    async fn apply(&self, plugin: &UiPlugin, transition: Transition) -> Result<()> {
        match transition {
            Transition::Enable => self.set_enabled(plugin, true).await,
            Transition::Disable => self.set_enabled(plugin, false).await,
            Transition::Delete => self.delete(plugin).await,
            Transition::ChangeScope(scope) => self.change_scope(plugin, scope).await,
            Transition::PublishAll => self.publish_all(plugin).await,
            Transition::UnpublishAll => self.unpublish_all(plugin).await,
        }
    }
}
