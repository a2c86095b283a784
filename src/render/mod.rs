//! Render module orchestrator.
//!
//! The recursive layout engine and final join policy live in the private
//! `core` module, the pluggable per-line text processors in `processor`.

mod core;
mod processor;

pub use core::{RenderOptions, RenderStyle, render, render_lines, render_traced};
pub use processor::{AnsiProcessor, LineProcessor, PlainProcessor};
