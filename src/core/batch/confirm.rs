//! Confirmation port
//!
//! The orchestrator never renders dialogs itself. It asks a
//! [`ConfirmationPort`] to show a message and report whether the operator
//! accepted, so a terminal prompt, a UI modal or a scripted test double can
//! stand behind it.

use async_trait::async_trait;

/// Content of a confirmation or notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOptions {
    pub title: String,
    pub body: String,
    /// Label of the accepting button
    pub accept: Option<String>,
    /// Label of the declining button; `None` for acknowledge-only notices
    pub decline: Option<String>,
    /// Keep the modal open until `close_modal` is called
    pub wait_to_close: bool,
}

impl ModalOptions {
    /// Yes/No question
    pub fn question<T: Into<String>, B: Into<String>>(title: T, body: B) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            accept: Some("Yes".to_string()),
            decline: Some("No".to_string()),
            wait_to_close: true,
        }
    }

    /// Informational notice with a single acknowledgement
    pub fn notice<T: Into<String>, B: Into<String>>(title: T, body: B) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            accept: Some("OK".to_string()),
            decline: None,
            wait_to_close: true,
        }
    }

    pub fn with_buttons<A: Into<String>, D: Into<String>>(mut self, accept: A, decline: D) -> Self {
        self.accept = Some(accept.into());
        self.decline = Some(decline.into());
        self
    }

    pub fn wait_to_close(mut self, wait: bool) -> Self {
        self.wait_to_close = wait;
        self
    }

    /// Whether the operator can decline
    pub fn is_question(&self) -> bool {
        self.decline.is_some()
    }
}

/// Operator's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalResponse {
    pub accept: bool,
}

impl ModalResponse {
    pub fn accepted() -> Self {
        Self { accept: true }
    }

    pub fn declined() -> Self {
        Self { accept: false }
    }
}

/// Yes/no oracle plus message display
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Show a modal and resolve once with the operator's answer
    async fn open_modal(&self, options: ModalOptions) -> ModalResponse;

    /// Release a modal opened with `wait_to_close`
    fn close_modal(&self);
}

/// Accepts every question without asking
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationPort for AutoConfirm {
    async fn open_modal(&self, options: ModalOptions) -> ModalResponse {
        tracing::debug!(title = %options.title, body = %options.body, "Auto-accepting");
        ModalResponse::accepted()
    }

    fn close_modal(&self) {}
}
