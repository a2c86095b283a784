//! Position-tracking module orchestrator.
//!
//! Recovers the absolute screen coordinates of reactive-tagged sub-trees by
//! replaying the renderer's placement arithmetic. Implementation details live
//! in the private `core` module.

mod core;

pub use core::{ReactiveAnnotation, position_of, positions};
