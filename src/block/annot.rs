use super::core::{Block, annotate, null_block};
use crate::ansi::{AnsiStyle, StyleAnnotation};
use crate::reactive::ReactiveAnnotation;

/// Bundled annotation payload set.
///
/// Each consumer dispatches on its own capability predicate — the renderer
/// asks for a style, the position tracker for a reactive id — never on where
/// the payload came from. Custom payload types only need to implement the
/// matching capability trait.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annot {
    Style(AnsiStyle),
    Reactive(String),
}

impl StyleAnnotation for Annot {
    fn as_style(&self) -> Option<&AnsiStyle> {
        match self {
            Annot::Style(style) => Some(style),
            Annot::Reactive(_) => None,
        }
    }
}

impl ReactiveAnnotation for Annot {
    fn reactive_id(&self) -> Option<&str> {
        match self {
            Annot::Reactive(id) => Some(id),
            Annot::Style(_) => None,
        }
    }
}

/// Attach an ANSI style to `block`.
pub fn styled(block: Block<Annot>, style: AnsiStyle) -> Block<Annot> {
    annotate(block, Annot::Style(style))
}

/// Tag `block` with an id recoverable through [`crate::reactive::positions`].
pub fn reactive(id: impl Into<String>, block: Block<Annot>) -> Block<Annot> {
    annotate(block, Annot::Reactive(id.into()))
}

/// Zero-size block carrying raw control sequences.
///
/// Renders as a synthetic line holding just its codes, so cursor commands
/// compose through ordinary concatenation alongside visible content.
pub fn command_block(style: AnsiStyle) -> Block<Annot> {
    annotate(null_block(), Annot::Style(style))
}
