//! ANSI styling module orchestrator.
//!
//! The attribute model and conflict-resolving combiner live in `style`, the
//! escape-preserving truncate/pad pair in `fit`, and cursor command
//! constructors in [`cursor`].

pub mod cursor;
mod fit;
mod style;

pub use fit::{pad_preserving_ansi, truncate_preserving_ansi};
pub use style::{AnsiStyle, Attr, AttrKind, RESET, StyleAnnotation, apply_styling};
