//! API extension service records

use super::{EntityKind, ManagedEntity, lenient_string};
use crate::core::xml::XmlValue;
use crate::utils::error::{LifecycleError, Result};
use serde::{Deserialize, Serialize};

/// Row of the admin extension service query (`AdminServiceRecord`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminServiceRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub href: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub namespace: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub exchange: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub routing_key: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub is_authorization_enabled: bool,
}

impl AdminServiceRecord {
    /// Read records out of a converted `QueryResultRecords` document.
    ///
    /// A query with no rows has no `AdminServiceRecord` key, a query with one
    /// row has a single object instead of a sequence.
    pub fn from_query(document: &XmlValue) -> Result<Vec<Self>> {
        let records = document
            .get("QueryResultRecords")
            .ok_or_else(|| LifecycleError::parsing("Missing QueryResultRecords element"))?;

        match records.get("AdminServiceRecord") {
            None => Ok(Vec::new()),
            Some(rows) => rows
                .clone()
                .into_list()
                .into_iter()
                .map(|row| serde_json::from_value(row.to_json()).map_err(LifecycleError::from))
                .collect(),
        }
    }
}

impl ManagedEntity for AdminServiceRecord {
    const KIND: EntityKind = EntityKind::ApiExtension;

    fn key(&self) -> &str {
        &self.href
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
