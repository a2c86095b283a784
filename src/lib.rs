//! Boxflow is a pure text-layout engine for terminal output.
//!
//! Layouts are immutable trees of [`Block`]s built by composition: `hcat`,
//! `vcat`, alignment wrappers, and paragraph flow. Rendering flattens a tree
//! to rows while measuring width per grapheme cluster and preserving ANSI
//! escape sequences, so styled content truncates and pads without corrupting
//! its escapes. Annotated subtrees can additionally be located after layout
//! through [`reactive::positions`].
//!
//! The crate performs no terminal I/O. Hosts own the screen; this crate owns
//! the string.

pub mod ansi;
pub mod block;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod reactive;
pub mod render;
pub mod width;
pub mod window;

pub use ansi::{AnsiStyle, Attr, AttrKind, RESET, StyleAnnotation};
pub use block::{
    Annot, Annotation, Block, Content, align_block, align_horiz, align_vert, annotate, beside,
    character, columns, command_block, empty_block, hcat, line, move_down, move_left, move_right,
    move_up, null_block, para, punctuate_h, punctuate_v, reactive, stack, styled, text,
    un_annotate, vcat,
};
pub use error::{LayoutError, Result};
pub use geometry::Rect;
pub use logging::{LogLevel, LogSink, Logger, LoggingResult};
pub use metrics::{MetricSnapshot, RenderMetrics, block_count};
pub use reactive::{ReactiveAnnotation, position_of, positions};
pub use render::{RenderOptions, RenderStyle, render, render_traced};
pub use width::display_width;
pub use window::Alignment;
