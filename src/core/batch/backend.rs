//! Endpoint-family abstraction used by the orchestrator

use super::transition::Transition;
use crate::core::entity::ManagedEntity;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of truth for one entity family
#[async_trait]
pub trait EntityBackend: Send + Sync {
    type Entity: ManagedEntity;

    /// Fetch the authoritative list
    async fn list(&self) -> Result<Vec<Self::Entity>>;

    /// Whether `apply` can carry out this transition at all
    fn supports(&self, transition: &Transition) -> bool;

    /// Issue the single request that moves `entity` through `transition`
    async fn apply(&self, entity: &Self::Entity, transition: Transition) -> Result<()>;
}
