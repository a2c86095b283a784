//! Windowing module orchestrator.
//!
//! Alignment and the padded/aligned list-windowing primitives every resize
//! operation in the engine is built from. Implementation details live in the
//! private `core` module.

mod core;

pub use core::{Alignment, leading_gap, take_aligned, take_padded};
