use unicode_segmentation::UnicodeSegmentation;

use crate::ansi::pad_preserving_ansi;
use crate::width::display_width;
use crate::window::{Alignment, take_aligned};

/// Pluggable per-line resize policy used by the layout engine.
///
/// The choice between the plain and ANSI-aware implementation is a single
/// top-level render configuration, never a per-node one.
pub trait LineProcessor {
    /// Resize `text` to exactly `width` visible columns, content anchored
    /// first.
    fn process_line(&self, text: &str, width: usize) -> String {
        self.process_line_aligned(text, width, Alignment::First)
    }

    /// Resize `text` to exactly `width` visible columns, positioning content
    /// per `align`. Content wider than the window truncates from the front.
    fn process_line_aligned(&self, text: &str, width: usize, align: Alignment) -> String;
}

/// Escape-blind processor for trees that carry no ANSI annotations.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainProcessor;

impl LineProcessor for PlainProcessor {
    fn process_line_aligned(&self, text: &str, width: usize, align: Alignment) -> String {
        let clusters: Vec<&str> = text.graphemes(true).collect();
        let current = display_width(text);
        // one target count serves both directions: grow by the missing
        // columns when padding, shed the surplus columns when cropping
        let target = (clusters.len() + width).saturating_sub(current);
        take_aligned(&clusters, align, &" ", target).concat()
    }
}

/// Escape-preserving processor, safe whenever annotations may be present.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiProcessor;

impl LineProcessor for AnsiProcessor {
    fn process_line_aligned(&self, text: &str, width: usize, align: Alignment) -> String {
        pad_preserving_ansi(text, width, align)
    }
}
