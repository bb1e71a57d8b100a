//! API extension services (`/api/admin/extension/service`)

use super::http::VcdClient;
use crate::core::batch::{EntityBackend, Transition};
use crate::core::entity::AdminServiceRecord;
use crate::core::xml::{XmlNode, write_node};
use crate::utils::error::{LifecycleError, Result};
use async_trait::async_trait;
use tracing::{debug, info};

/// Admin query listing every registered extension service
pub const QUERY_PATH: &str = "/api/admin/extension/service/query";
/// Content type of a `vmext:Service` update
pub const SERVICE_CONTENT_TYPE: &str = "application/vnd.vmware.admin.service+xml";

const VCLOUD_NS: &str = "http://www.vmware.com/vcloud/v1.5";
const EXTENSION_NS: &str = "http://www.vmware.com/vcloud/extension/v1.5";

/// Extension services exposed by the XML admin API
#[derive(Debug, Clone)]
pub struct ApiExtensionService {
    client: VcdClient,
}

impl ApiExtensionService {
    pub fn new(client: VcdClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &VcdClient {
        &self.client
    }

    pub async fn list(&self) -> Result<Vec<AdminServiceRecord>> {
        let document = self.client.get_xml(QUERY_PATH).await?;
        let records = AdminServiceRecord::from_query(&document)?;
        debug!(count = records.len(), "Listed extension services");
        Ok(records)
    }

    pub async fn set_enabled(&self, record: &AdminServiceRecord, enabled: bool) -> Result<()> {
        info!(name = %record.name, enabled, "Updating extension service");
        let body = service_document(record, enabled)?;
        self.client
            .put_xml(&record.href, SERVICE_CONTENT_TYPE, body)
            .await
    }

    pub async fn delete(&self, record: &AdminServiceRecord) -> Result<()> {
        info!(name = %record.name, "Deleting extension service");
        self.client.delete_xml(&record.href).await
    }
}

/// `vmext:Service` update body carrying the record's own registration
pub fn service_document(record: &AdminServiceRecord, enabled: bool) -> Result<String> {
    let field = |name: &str, value: &str| XmlNode::element(name).with_child(XmlNode::text(value));

    let service = XmlNode::element("vmext:Service")
        .with_attribute("xmlns", VCLOUD_NS)
        .with_attribute("xmlns:vmext", EXTENSION_NS)
        .with_attribute("name", record.name.as_str())
        .with_child(field("vmext:Namespace", &record.namespace))
        .with_child(field("vmext:Enabled", if enabled { "true" } else { "false" }))
        .with_child(field("vmext:RoutingKey", &record.routing_key))
        .with_child(field("vmext:Exchange", &record.exchange));

    write_node(&XmlNode::Document {
        children: vec![service.into()],
    })
}

#[async_trait]
impl EntityBackend for ApiExtensionService {
    type Entity = AdminServiceRecord;

    async fn list(&self) -> Result<Vec<AdminServiceRecord>> {
        ApiExtensionService::list(self).await
    }

    fn supports(&self, transition: &Transition) -> bool {
        matches!(
            transition,
            Transition::Enable | Transition::Disable | Transition::Delete
        )
    }

    async fn apply(&self, record: &AdminServiceRecord, transition: Transition) -> Result<()> {
        match transition {
            Transition::Enable => self.set_enabled(record, true).await,
            Transition::Disable => self.set_enabled(record, false).await,
            Transition::Delete => self.delete(record).await,
            other => Err(LifecycleError::unsupported(format!(
                "{} is not available for API Extensions",
                other
            ))),
        }
    }
}
