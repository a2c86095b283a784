use crate::width::{display_width, segments};
use crate::window::{Alignment, take_aligned};

/// Truncate to at most `max` visible columns, copying escape sequences
/// through without charging them against the budget.
///
/// Scanning stops at the first cluster that no longer fits, so escape
/// sequences after the cut are dropped. Malformed sequences never loop: the
/// tokenizer treats an unterminated escape as running to the end of the text.
pub fn truncate_preserving_ansi(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut remaining = max;
    for segment in segments(text) {
        if segment.is_escape() {
            out.push_str(segment.as_str());
            continue;
        }
        let width = segment.width();
        if width > remaining {
            break;
        }
        remaining -= width;
        out.push_str(segment.as_str());
    }
    out
}

/// Pad (or truncate) to exactly `target` visible columns, positioning the
/// padding per `align` and leaving escape sequences intact.
///
/// The token stream is extended with single-space pad tokens through
/// [`take_aligned`], so escape tokens ride along at zero width.
pub fn pad_preserving_ansi(text: &str, target: usize, align: Alignment) -> String {
    let current = display_width(text);
    if current >= target {
        return truncate_preserving_ansi(text, target);
    }
    let tokens: Vec<String> = segments(text)
        .into_iter()
        .map(|segment| segment.as_str().to_string())
        .collect();
    let pad = " ".to_string();
    take_aligned(&tokens, align, &pad, tokens.len() + (target - current)).concat()
}
