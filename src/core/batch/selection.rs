//! Fetched entity list and the operator's selection

use crate::core::entity::ManagedEntity;
use crate::utils::error::{LifecycleError, Result};

/// Most recently fetched list plus the selected subset.
///
/// The selection only ever holds entities of the current list; replacing
/// the list drops selected entries that disappeared and swaps the rest for
/// their fresh copies.
#[derive(Debug, Clone)]
pub struct Inventory<E> {
    entities: Vec<E>,
    selected: Vec<E>,
}

impl<E> Default for Inventory<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            selected: Vec::new(),
        }
    }
}

impl<E: ManagedEntity> Inventory<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn selected(&self) -> &[E] {
        &self.selected
    }

    /// Install a freshly fetched list and reconcile the selection against it
    pub fn replace(&mut self, fresh: Vec<E>) {
        let keys: Vec<String> = self.selected.iter().map(|e| e.key().to_string()).collect();
        self.entities = fresh;
        self.selected = self
            .entities
            .iter()
            .filter(|e| keys.iter().any(|k| k == e.key()))
            .cloned()
            .collect();
    }

    /// Find an entity by key, falling back to its name
    pub fn find(&self, ident: &str) -> Option<&E> {
        self.entities
            .iter()
            .find(|e| e.key() == ident)
            .or_else(|| self.entities.iter().find(|e| e.name() == ident))
    }

    /// Replace the selection with the entities named by `idents`
    pub fn select<S: AsRef<str>>(&mut self, idents: &[S]) -> Result<()> {
        let mut selected: Vec<E> = Vec::with_capacity(idents.len());
        for ident in idents {
            let ident = ident.as_ref();
            let entity = self.find(ident).ok_or_else(|| {
                LifecycleError::not_found(format!("{} '{}'", E::KIND.singular(), ident))
            })?;
            if !selected.iter().any(|s| s.key() == entity.key()) {
                selected.push(entity.clone());
            }
        }
        self.selected = selected;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selected = self.entities.clone();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// At least one selected entity is disabled
    pub fn can_enable(&self) -> bool {
        self.selected.iter().any(|e| !e.is_enabled())
    }

    /// At least one selected entity is enabled
    pub fn can_disable(&self) -> bool {
        self.selected.iter().any(|e| e.is_enabled())
    }

    /// Whether an entity with this name is already registered
    pub fn has_entity_named(&self, name: &str) -> bool {
        self.entities.iter().any(|e| e.name() == name)
    }
}
