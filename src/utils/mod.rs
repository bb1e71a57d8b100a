//! Utility modules
//!
//! - **error**: Error type, `Result` alias and error inspection helpers

pub mod error;
