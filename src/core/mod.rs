//! Core functionality for plugin and extension administration
//!
//! This module contains the XML mapper, the entity records and the batch
//! orchestrator. Nothing in here talks to the network directly.

pub mod batch;
pub mod entity;
pub mod xml;
