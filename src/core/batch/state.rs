//! Per-batch state machine

use std::fmt;

/// Where a batch invocation currently is.
///
/// `Idle -> Confirming -> {Aborted | Executing} -> {Succeeded | Failed} -> Idle`.
/// A failed delete may go back to `Confirming` once to offer the
/// disable-then-delete remediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchState {
    #[default]
    Idle,
    Confirming,
    Aborted,
    Executing,
    Succeeded,
    Failed,
}

impl BatchState {
    pub fn can_transition_to(&self, next: BatchState) -> bool {
        use BatchState::*;
        matches!(
            (self, next),
            (Idle, Confirming)
                | (Confirming, Confirming)
                | (Confirming, Aborted)
                | (Confirming, Executing)
                | (Executing, Succeeded)
                | (Executing, Failed)
                | (Failed, Confirming)
                | (Aborted, Idle)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    /// Requests are in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, BatchState::Executing)
    }
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatchState::Idle => "idle",
            BatchState::Confirming => "confirming",
            BatchState::Aborted => "aborted",
            BatchState::Executing => "executing",
            BatchState::Succeeded => "succeeded",
            BatchState::Failed => "failed",
        };
        f.write_str(name)
    }
}
