//! Partitioning a selection by current state

use super::confirm::ModalOptions;
use super::transition::Transition;
use crate::core::entity::ManagedEntity;

/// Selected entities split into those still needing the transition and
/// those already in the target state
#[derive(Debug, Clone)]
pub struct BatchPlan<E> {
    pub transition: Transition,
    pub eligible: Vec<E>,
    pub satisfied: Vec<E>,
}

impl<E: ManagedEntity> BatchPlan<E> {
    pub fn partition(selected: &[E], transition: Transition) -> Self {
        let (satisfied, eligible): (Vec<E>, Vec<E>) = selected
            .iter()
            .cloned()
            .partition(|e| transition.is_satisfied_by(e));

        Self {
            transition,
            eligible,
            satisfied,
        }
    }

    pub fn total(&self) -> usize {
        self.eligible.len() + self.satisfied.len()
    }

    /// Nothing left to do
    pub fn is_noop(&self) -> bool {
        self.eligible.is_empty()
    }

    /// Some, but not all, selected entities need the transition
    pub fn is_partial(&self) -> bool {
        !self.eligible.is_empty() && !self.satisfied.is_empty()
    }

    /// Opening question for the whole selection
    pub fn question(&self) -> ModalOptions {
        ModalOptions::question(self.transition.title(), self.transition.question(E::KIND))
    }

    /// Notice shown when every selected entity is already in the target state
    pub fn already_satisfied_notice(&self) -> ModalOptions {
        ModalOptions::notice(
            self.transition.title(),
            format!(
                "All {} {} are already {}.",
                self.total(),
                E::KIND.plural(),
                self.transition.target_state()
            ),
        )
    }

    /// Question shown when only part of the selection needs the transition
    pub fn partial_question(&self) -> ModalOptions {
        ModalOptions::question(
            self.transition.title(),
            format!(
                "{} of {} are already {}. Do you want to proceed?",
                self.satisfied.len(),
                self.total(),
                self.transition.target_state()
            ),
        )
    }

    /// Enabled entities of the eligible set, the ones a delete may have
    /// been refused for
    pub fn enabled_eligible(&self) -> Vec<E> {
        self.eligible
            .iter()
            .filter(|e| e.is_enabled())
            .cloned()
            .collect()
    }

    /// Offer to disable before deleting
    pub fn remediation_question(&self) -> ModalOptions {
        ModalOptions::question(
            Transition::Delete.title(),
            format!(
                "You must disable the {}(s) before delete.",
                E::KIND.singular()
            ),
        )
        .with_buttons("Disable", "Cancel")
        .wait_to_close(false)
    }
}
