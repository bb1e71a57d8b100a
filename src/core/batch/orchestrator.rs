//! Batch action orchestrator

use super::backend::EntityBackend;
use super::confirm::{ConfirmationPort, ModalOptions};
use super::plan::BatchPlan;
use super::selection::Inventory;
use super::state::BatchState;
use super::transition::Transition;
use crate::core::entity::ManagedEntity;
use crate::utils::error::{LifecycleError, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, error, info, warn};

/// Summary of a batch whose requests all succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub transition: Transition,
    /// Requests issued by the final batch
    pub requested: usize,
    pub succeeded: usize,
    /// Entities disabled first because a delete was refused for them
    pub remediated: usize,
}

/// How a batch invocation ended, short of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Empty selection, nothing was asked or sent
    NothingSelected,
    /// The operator declined a confirmation; no request was sent
    Declined,
    /// Every selected entity was already in the target state
    AlreadySatisfied { total: usize },
    /// Requests were sent and all succeeded
    Completed(BatchReport),
}

/// Drives enable/disable/delete/publish batches for one entity family.
///
/// Owns the fetched list and the selection. Every batch that reaches the
/// server is followed by exactly one re-fetch of the list, whether it
/// succeeded or not.
pub struct BatchOrchestrator<B, C>
where
    B: EntityBackend,
    C: ConfirmationPort,
{
    backend: B,
    confirm: C,
    inventory: Inventory<B::Entity>,
    state: BatchState,
}

impl<B, C> BatchOrchestrator<B, C>
where
    B: EntityBackend,
    C: ConfirmationPort,
{
    pub fn new(backend: B, confirm: C) -> Self {
        Self {
            backend,
            confirm,
            inventory: Inventory::new(),
            state: BatchState::Idle,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn confirmation(&self) -> &C {
        &self.confirm
    }

    pub fn inventory(&self) -> &Inventory<B::Entity> {
        &self.inventory
    }

    pub fn entities(&self) -> &[B::Entity] {
        self.inventory.entities()
    }

    pub fn selected(&self) -> &[B::Entity] {
        self.inventory.selected()
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn select<S: AsRef<str>>(&mut self, idents: &[S]) -> Result<()> {
        self.inventory.select(idents)
    }

    pub fn select_all(&mut self) {
        self.inventory.select_all();
    }

    pub fn clear_selection(&mut self) {
        self.inventory.clear_selection();
    }

    /// Initial fetch; starts with an empty selection
    pub async fn load(&mut self) -> Result<()> {
        self.inventory.clear_selection();
        self.refresh().await
    }

    /// Re-fetch the authoritative list
    pub async fn refresh(&mut self) -> Result<()> {
        let fresh = self.backend.list().await?;
        debug!(
            count = fresh.len(),
            "Fetched {}",
            <B::Entity as ManagedEntity>::KIND.plural()
        );
        self.inventory.replace(fresh);
        Ok(())
    }

    /// Confirm and apply `transition` to the current selection.
    ///
    /// Declined confirmations are not errors. A failure of any request
    /// yields `LifecycleError::Batch` carrying the first error observed.
    pub async fn run(&mut self, transition: Transition) -> Result<BatchOutcome> {
        let kind = <B::Entity as ManagedEntity>::KIND;

        if self.state != BatchState::Idle {
            warn!(state = %self.state, "Previous batch did not finish, resetting");
            self.state = BatchState::Idle;
        }

        if self.inventory.selected().is_empty() {
            info!(%transition, "No {} selected", kind.plural());
            return Ok(BatchOutcome::NothingSelected);
        }

        if !self.backend.supports(&transition) {
            return Err(LifecycleError::unsupported(format!(
                "{} is not available for {}",
                transition,
                kind.plural()
            )));
        }

        let plan = BatchPlan::partition(self.inventory.selected(), transition);

        self.enter(BatchState::Confirming);
        if !self.ask(plan.question()).await {
            return Ok(self.abort(BatchOutcome::Declined));
        }

        if plan.is_noop() {
            self.confirm
                .open_modal(plan.already_satisfied_notice())
                .await;
            return Ok(self.abort(BatchOutcome::AlreadySatisfied {
                total: plan.total(),
            }));
        }

        if plan.is_partial() {
            self.enter(BatchState::Confirming);
            if !self.ask(plan.partial_question()).await {
                return Ok(self.abort(BatchOutcome::Declined));
            }
        }
        self.confirm.close_modal();

        self.enter(BatchState::Executing);
        let executed = self.execute(&plan.eligible, transition).await;
        let result = match executed {
            Err(error) if transition == Transition::Delete && error.is_precondition_failure() => {
                self.remediate(&plan, error).await
            }
            other => other,
        };

        self.finish(result).await
    }

    /// Offer to disable the enabled part of a refused delete, then delete
    /// it. The disable batch completes before any delete is sent.
    async fn remediate(
        &mut self,
        plan: &BatchPlan<B::Entity>,
        original: LifecycleError,
    ) -> Result<BatchReport> {
        let enabled = plan.enabled_eligible();
        if enabled.is_empty() {
            return Err(original);
        }

        self.enter(BatchState::Failed);
        self.enter(BatchState::Confirming);
        let accepted = self
            .confirm
            .open_modal(plan.remediation_question())
            .await
            .accept;

        if !accepted {
            info!("Disable-before-delete declined");
            self.enter(BatchState::Aborted);
            return Err(original);
        }

        self.enter(BatchState::Executing);
        info!(count = enabled.len(), "Disabling before delete");
        self.execute(&enabled, Transition::Disable).await?;

        let report = self.execute(&enabled, Transition::Delete).await?;
        Ok(BatchReport {
            remediated: enabled.len(),
            ..report
        })
    }

    /// Issue one request per entity, all in flight at once, and wait for
    /// every one of them.
    async fn execute(&self, entities: &[B::Entity], transition: Transition) -> Result<BatchReport> {
        let total = entities.len();
        info!(%transition, total, "Submitting batch");

        let backend = &self.backend;
        let mut in_flight: FuturesUnordered<_> = entities
            .iter()
            .map(|entity| async move { (entity, backend.apply(entity, transition).await) })
            .collect();

        let mut failed = 0;
        let mut first_error = None;
        while let Some((entity, result)) = in_flight.next().await {
            match result {
                Ok(()) => debug!(key = entity.key(), %transition, "Request succeeded"),
                Err(e) => {
                    failed += 1;
                    warn!(key = entity.key(), %transition, error = %e, "Request failed");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            None => Ok(BatchReport {
                transition,
                requested: total,
                succeeded: total,
                remediated: 0,
            }),
            Some(error) => Err(LifecycleError::batch(failed, total, error)),
        }
    }

    async fn finish(&mut self, result: Result<BatchReport>) -> Result<BatchOutcome> {
        if self.state == BatchState::Executing {
            self.enter(if result.is_ok() {
                BatchState::Succeeded
            } else {
                BatchState::Failed
            });
        }

        let refreshed = self.refresh().await;
        self.enter(BatchState::Idle);

        match (result, refreshed) {
            (Ok(report), Ok(())) => {
                info!(
                    transition = %report.transition,
                    succeeded = report.succeeded,
                    remediated = report.remediated,
                    "Batch completed"
                );
                Ok(BatchOutcome::Completed(report))
            }
            (Ok(_), Err(e)) => {
                error!(error = %e, "Batch applied but the list could not be refreshed");
                Err(e)
            }
            (Err(e), refreshed) => {
                if let Err(refresh_error) = refreshed {
                    warn!(error = %refresh_error, "List refresh after failed batch failed");
                }
                error!(error = %e, "Batch failed");
                Err(e)
            }
        }
    }

    async fn ask(&self, options: ModalOptions) -> bool {
        self.confirm.open_modal(options).await.accept
    }

    fn abort(&mut self, outcome: BatchOutcome) -> BatchOutcome {
        self.confirm.close_modal();
        self.enter(BatchState::Aborted);
        self.enter(BatchState::Idle);
        info!(?outcome, "Batch ended without requests");
        outcome
    }

    fn enter(&mut self, next: BatchState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid batch state change {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "Batch state");
        self.state = next;
    }
}
