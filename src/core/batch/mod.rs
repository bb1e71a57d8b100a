//! Batched actions over selected entities
//!
//! A batch takes the operator's selection and a [`Transition`], splits the
//! selection into entities that still need the transition and entities
//! already in the target state, confirms through a [`ConfirmationPort`],
//! then sends one request per eligible entity concurrently. The
//! authoritative list is re-fetched after every batch that reached the
//! server.

mod backend;
mod confirm;
mod orchestrator;
mod plan;
mod selection;
mod state;
mod transition;

pub use backend::EntityBackend;
pub use confirm::{AutoConfirm, ConfirmationPort, ModalOptions, ModalResponse};
pub use orchestrator::{BatchOrchestrator, BatchOutcome, BatchReport};
pub use plan::BatchPlan;
pub use selection::Inventory;
pub use state::BatchState;
pub use transition::Transition;
