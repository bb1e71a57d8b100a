//! Manageable entities
//!
//! Both endpoint families expose records that can be enabled, disabled and
//! deleted. [`ManagedEntity`] is the view the batch orchestrator needs of
//! them.

mod admin_service;
mod scope;
mod ui_plugin;

pub use admin_service::AdminServiceRecord;
pub use scope::Scope;
pub use ui_plugin::UiPlugin;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::Debug;

/// Entity family, used for user-facing wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    ApiExtension,
    UiPlugin,
}

impl EntityKind {
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::ApiExtension => "API Extensions",
            EntityKind::UiPlugin => "UI Plugins",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::ApiExtension => "API Extension",
            EntityKind::UiPlugin => "UI Plugin",
        }
    }
}

/// An object the management API lets an operator enable, disable or delete
pub trait ManagedEntity: Clone + Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Identity used to address the entity (href or id)
    fn key(&self) -> &str;

    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Publication scope, when the entity family has one
    fn scope(&self) -> Option<Scope> {
        None
    }
}

/// Accept strings, numbers and booleans for text fields.
///
/// XML attributes go through JSON-literal coercion, so a service named
/// `2024` arrives as a number.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
