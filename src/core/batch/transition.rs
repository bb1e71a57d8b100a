//! Batch transitions

use crate::core::entity::{EntityKind, ManagedEntity, Scope};
use std::fmt;

/// Action applied to every entity of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enable,
    Disable,
    Delete,
    ChangeScope(Scope),
    PublishAll,
    UnpublishAll,
}

impl Transition {
    /// Modal title
    pub fn title(&self) -> &'static str {
        match self {
            Transition::Enable => "Enable",
            Transition::Disable => "Disable",
            Transition::Delete => "Delete",
            Transition::ChangeScope(_) => "Change scope",
            Transition::PublishAll => "Publish",
            Transition::UnpublishAll => "Unpublish",
        }
    }

    /// Opening question asked before anything else
    pub fn question(&self, kind: EntityKind) -> String {
        let kind = kind.plural();
        match self {
            Transition::Enable => format!("Are you sure you want to enable the {}?", kind),
            Transition::Disable => format!("Are you sure you want to disable the {}?", kind),
            Transition::Delete => format!("Are you sure you want to delete these {}?", kind),
            Transition::ChangeScope(scope) => format!(
                "Are you sure you want to change the scope of the {} to {}?",
                kind, scope
            ),
            Transition::PublishAll => {
                format!("Are you sure you want to publish the {} for all tenants?", kind)
            }
            Transition::UnpublishAll => format!(
                "Are you sure you want to unpublish the {} from all tenants?",
                kind
            ),
        }
    }

    /// Wording for entities already in the target state
    pub fn target_state(&self) -> String {
        match self {
            Transition::Enable => "enabled".to_string(),
            Transition::Disable => "disabled".to_string(),
            Transition::Delete => "deleted".to_string(),
            Transition::ChangeScope(scope) => format!("scoped to {}", scope),
            Transition::PublishAll => "published".to_string(),
            Transition::UnpublishAll => "unpublished".to_string(),
        }
    }

    /// Whether `entity` already is where this transition would take it.
    ///
    /// Deletion and tenant publication are never considered satisfied: the
    /// listing carries no state to compare against.
    pub fn is_satisfied_by<E: ManagedEntity>(&self, entity: &E) -> bool {
        match self {
            Transition::Enable => entity.is_enabled(),
            Transition::Disable => !entity.is_enabled(),
            Transition::ChangeScope(scope) => entity.scope() == Some(*scope),
            Transition::Delete | Transition::PublishAll | Transition::UnpublishAll => false,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::ChangeScope(scope) => write!(f, "change-scope({})", scope),
            other => write!(f, "{}", other.title().to_lowercase()),
        }
    }
}
