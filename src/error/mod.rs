//! Error module orchestrator.
//!
//! Downstream code imports error types from here while the definitions live
//! in the private `types` module.

mod types;

pub use types::{LayoutError, Result};
