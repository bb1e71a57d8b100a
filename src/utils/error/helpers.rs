//! Helper functions for creating and inspecting errors

use super::types::LifecycleError;

/// Helper functions for creating specific errors
impl LifecycleError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn xml<S: Into<String>>(message: S) -> Self {
        Self::Xml(message.into())
    }

    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn batch(failed: usize, total: usize, source: LifecycleError) -> Self {
        Self::Batch {
            failed,
            total,
            source: Box::new(source),
        }
    }
}

impl LifecycleError {
    /// HTTP status carried by the error, looking through batch wrappers
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::HttpClient(e) => e.status().map(|s| s.as_u16()),
            Self::Batch { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether the server refused the operation because of the entity's
    /// current state, e.g. deleting an extension that is still enabled.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(self.status(), Some(400) | Some(409))
    }

    /// Whether the failure happened below the API layer
    pub fn is_transport(&self) -> bool {
        match self {
            Self::HttpClient(e) => e.status().is_none(),
            Self::Batch { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Innermost error, unwrapping batch aggregation
    pub fn root_cause(&self) -> &LifecycleError {
        match self {
            Self::Batch { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
