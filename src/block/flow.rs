use super::core::{Block, align_vert, line, vcat};
use crate::width::{display_width, truncate_to_width};
use crate::window::Alignment;

/// Flow `text` into a paragraph at most `width` columns wide, lines aligned
/// per `align`.
pub fn para<A>(align: Alignment, width: usize, text: &str) -> Block<A> {
    let lines = flow(width, text);
    let height = lines.len();
    para_block(align, height, lines)
}

/// Flow `text` into `height`-row columns, each at most `width` wide.
pub fn columns<A>(align: Alignment, width: usize, height: usize, text: &str) -> Vec<Block<A>> {
    flow(width, text)
        .chunks(height.max(1))
        .map(|chunk| para_block(align, height, chunk.to_vec()))
        .collect()
}

fn para_block<A>(align: Alignment, height: usize, lines: Vec<String>) -> Block<A> {
    align_vert(
        Alignment::First,
        height,
        vcat(align, lines.into_iter().map(line).collect()),
    )
}

/// Greedy word-wrap: a word joins the current line while the joined width
/// still fits; otherwise it starts a new line. Words wider than `width` are
/// hard-truncated in the final pass rather than re-split.
fn flow(width: usize, text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
        .into_iter()
        .map(|line| truncate_to_width(&line, width).to_string())
        .collect()
}
