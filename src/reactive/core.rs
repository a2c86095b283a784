use std::collections::HashMap;

use crate::block::{Block, Content};
use crate::geometry::Rect;
use crate::window::leading_gap;

/// Capability predicate the position tracker dispatches on: does this
/// annotation payload carry a reactive id?
pub trait ReactiveAnnotation {
    fn reactive_id(&self) -> Option<&str>;
}

impl ReactiveAnnotation for () {
    fn reactive_id(&self) -> Option<&str> {
        None
    }
}

/// Recover absolute coordinates for every reactive-tagged sub-tree.
///
/// A pure function of the tree, fully recomputed on each call: rows advance
/// through `Col` children, columns through `Row` children, and sub-box
/// windows add the same leading gap the renderer produces. Zero-size blocks
/// are never recorded.
pub fn positions<A: ReactiveAnnotation>(block: &Block<A>) -> HashMap<String, Rect> {
    let mut map = HashMap::new();
    walk(block, 0, 0, &mut map);
    map
}

/// Coordinates for a single id; an absent id yields `None`, never an error.
pub fn position_of<A: ReactiveAnnotation>(block: &Block<A>, id: &str) -> Option<Rect> {
    positions(block).remove(id)
}

fn walk<A: ReactiveAnnotation>(
    block: &Block<A>,
    row: usize,
    col: usize,
    map: &mut HashMap<String, Rect>,
) {
    if block.rows() == 0 || block.cols() == 0 {
        // nothing inside a zero-size window is visible
        return;
    }
    if let Some(id) = block.payload().and_then(ReactiveAnnotation::reactive_id) {
        map.insert(id.to_string(), Rect::new(row, col, block.rows(), block.cols()));
    }
    match block.content() {
        Content::Blank | Content::Text(_) => {}
        Content::Row(children) => {
            let mut col = col;
            for child in children {
                walk(child, row, col, map);
                col += child.cols();
            }
        }
        Content::Col(children) => {
            let mut row = row;
            for child in children {
                walk(child, row, col, map);
                row += child.rows();
            }
        }
        Content::Sub {
            child,
            h_align,
            v_align,
        } => {
            let child_row = row + leading_gap(*v_align, block.rows(), child.rows());
            let child_col = col + leading_gap(*h_align, block.cols(), child.cols());
            walk(child, child_row, child_col, map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Annot, hcat, move_down, move_right, reactive, stack, text, vcat};
    use crate::window::Alignment;

    #[test]
    fn row_siblings_advance_columns() {
        let tree = hcat(Alignment::First, vec![
            reactive("left", text("Left")),
            reactive("right", text("Right")),
        ]);
        let map = positions(&tree);
        assert_eq!(map.get("left"), Some(&Rect::new(0, 0, 1, 4)));
        assert_eq!(map.get("right"), Some(&Rect::new(0, 4, 1, 5)));
    }

    #[test]
    fn col_siblings_advance_rows() {
        let tree = vcat(Alignment::First, vec![
            reactive("top", text("aa\nbb")),
            reactive("bottom", text("cc")),
        ]);
        let map = positions(&tree);
        assert_eq!(map.get("top"), Some(&Rect::new(0, 0, 2, 2)));
        assert_eq!(map.get("bottom"), Some(&Rect::new(2, 0, 1, 2)));
    }

    #[test]
    fn sub_windows_add_alignment_gaps() {
        let tree = move_down(2, move_right(3, reactive("tag", text("x"))));
        assert_eq!(position_of(&tree, "tag"), Some(Rect::new(2, 3, 1, 1)));
    }

    #[test]
    fn centered_gap_matches_renderer_bias() {
        let tree = hcat(Alignment::Center1, vec![
            reactive("tall", text("a\nb")),
            reactive("short", text("c")),
        ]);
        // Center1 puts the single spare row first: short lands on the last row
        assert_eq!(position_of(&tree, "short"), Some(Rect::new(1, 1, 1, 1)));
    }

    #[test]
    fn absent_and_zero_size_ids_are_none() {
        let tree: Block<Annot> = stack(reactive("a", text("x")), reactive("b", text("")));
        assert_eq!(position_of(&tree, "missing"), None);
        assert_eq!(position_of(&tree, "b"), None);
    }
}
