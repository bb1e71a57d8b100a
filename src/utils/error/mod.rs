//! Error handling
//!
//! This module defines the error type shared by the XML mapper, the HTTP
//! services and the batch orchestrator.

mod helpers;
mod types;

pub use types::{LifecycleError, Result};
