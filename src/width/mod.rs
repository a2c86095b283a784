//! Display-width module orchestrator.
//!
//! Downstream code imports the width oracle from here while the
//! implementation details live in the private `core` module.

mod core;

pub use core::{Segment, display_width, segments, truncate_to_width};
