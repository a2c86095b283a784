use crate::error::{LayoutError, Result};
use crate::width::display_width;
use crate::window::Alignment;

/// Opaque payload attached to exactly one block node.
///
/// Equality and hashing are structural over the payload, never identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation<A>(pub A);

/// Immutable rectangular layout node with a fixed row/col extent.
///
/// Blocks are values: every transformation returns a new node wrapping or
/// shallow-copying the original, so a node may be shared between parents
/// freely (the tree is a DAG, never a graph with cycles).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block<A> {
    rows: usize,
    cols: usize,
    content: Content<A>,
    annotation: Option<Annotation<A>>,
}

/// Closed content variant set; rendering and position tracking match on this
/// exhaustively, so a new variant forces every consumer to handle it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content<A> {
    Blank,
    /// Single-line literal content. Multi-line text is pre-split into
    /// stacked text lines by [`text`].
    Text(String),
    /// Horizontal composition; children are already vertically aligned to
    /// the shared height at construction time.
    Row(Vec<Block<A>>),
    /// Vertical composition; children are already horizontally aligned to
    /// the shared width at construction time.
    Col(Vec<Block<A>>),
    /// A `rows`×`cols` window the child is fitted into, padding or cropping
    /// per the two alignments.
    Sub {
        child: Box<Block<A>>,
        h_align: Alignment,
        v_align: Alignment,
    },
}

impl<A> Block<A> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn content(&self) -> &Content<A> {
        &self.content
    }

    pub fn annotation(&self) -> Option<&Annotation<A>> {
        self.annotation.as_ref()
    }

    pub fn payload(&self) -> Option<&A> {
        self.annotation.as_ref().map(|annotation| &annotation.0)
    }

    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    /// Map every annotation payload in the tree through `f`.
    ///
    /// Defined only on annotated blocks; callers check with
    /// [`Block::is_annotated`] first.
    pub fn re_annotate<B, F>(self, f: &F) -> Result<Block<B>>
    where
        F: Fn(A) -> B,
    {
        if self.annotation.is_none() {
            return Err(LayoutError::MissingAnnotation);
        }
        Ok(self.map_payload(f))
    }

    fn map_payload<B, F>(self, f: &F) -> Block<B>
    where
        F: Fn(A) -> B,
    {
        let content = match self.content {
            Content::Blank => Content::Blank,
            Content::Text(text) => Content::Text(text),
            Content::Row(children) => Content::Row(
                children
                    .into_iter()
                    .map(|child| child.map_payload(f))
                    .collect(),
            ),
            Content::Col(children) => Content::Col(
                children
                    .into_iter()
                    .map(|child| child.map_payload(f))
                    .collect(),
            ),
            Content::Sub {
                child,
                h_align,
                v_align,
            } => Content::Sub {
                child: Box::new(child.map_payload(f)),
                h_align,
                v_align,
            },
        };
        Block {
            rows: self.rows,
            cols: self.cols,
            content,
            annotation: self.annotation.map(|Annotation(payload)| Annotation(f(payload))),
        }
    }
}

impl<A: Clone> Block<A> {
    /// Fan the root annotation out into one block per variant produced by `f`.
    ///
    /// Defined only on annotated blocks, like [`Block::re_annotate`].
    pub fn alter_annotations<F>(&self, f: &F) -> Result<Vec<Block<A>>>
    where
        F: Fn(&A) -> Vec<A>,
    {
        let Some(Annotation(payload)) = self.annotation.as_ref() else {
            return Err(LayoutError::MissingAnnotation);
        };
        Ok(f(payload)
            .into_iter()
            .map(|variant| {
                let mut block = self.clone();
                block.annotation = Some(Annotation(variant));
                block
            })
            .collect())
    }
}

/// Single text line at its natural display width.
pub fn line<A>(s: impl Into<String>) -> Block<A> {
    let s = s.into();
    Block {
        rows: 1,
        cols: display_width(&s),
        content: Content::Text(s),
        annotation: None,
    }
}

/// Text block; multi-line input is pre-split into stacked text lines.
pub fn text<A>(s: &str) -> Block<A> {
    if s.is_empty() {
        return null_block();
    }
    vcat(Alignment::First, s.split('\n').map(line).collect())
}

/// One-character block.
pub fn character<A>(c: char) -> Block<A> {
    line(c.to_string())
}

/// Empty `rows`×`cols` cell grid.
pub fn empty_block<A>(rows: usize, cols: usize) -> Block<A> {
    Block {
        rows,
        cols,
        content: Content::Blank,
        annotation: None,
    }
}

/// The 0×0 block: identity for [`beside`] and [`stack`].
pub fn null_block<A>() -> Block<A> {
    empty_block(0, 0)
}

/// Horizontal composition. Height is the tallest child, width the sum;
/// every child is wrapped to the shared height per `align`.
pub fn hcat<A>(align: Alignment, blocks: Vec<Block<A>>) -> Block<A> {
    let rows = blocks.iter().map(Block::rows).max().unwrap_or(0);
    let cols = blocks.iter().map(Block::cols).sum();
    let children = blocks
        .into_iter()
        .map(|block| align_vert(align, rows, block))
        .collect();
    Block {
        rows,
        cols,
        content: Content::Row(children),
        annotation: None,
    }
}

/// Vertical composition. Width is the widest child, height the sum; every
/// child is wrapped to the shared width per `align`.
pub fn vcat<A>(align: Alignment, blocks: Vec<Block<A>>) -> Block<A> {
    let rows = blocks.iter().map(Block::rows).sum();
    let cols = blocks.iter().map(Block::cols).max().unwrap_or(0);
    let children = blocks
        .into_iter()
        .map(|block| align_horiz(align, cols, block))
        .collect();
    Block {
        rows,
        cols,
        content: Content::Col(children),
        annotation: None,
    }
}

/// Place `right` to the right of `left`, tops aligned.
pub fn beside<A>(left: Block<A>, right: Block<A>) -> Block<A> {
    hcat(Alignment::First, vec![left, right])
}

/// Place `bottom` under `top`, left edges aligned.
pub fn stack<A>(top: Block<A>, bottom: Block<A>) -> Block<A> {
    vcat(Alignment::First, vec![top, bottom])
}

/// Fit `block` into a `rows`×`cols` window positioned by the two alignments.
pub fn align_block<A>(
    h_align: Alignment,
    v_align: Alignment,
    rows: usize,
    cols: usize,
    block: Block<A>,
) -> Block<A> {
    Block {
        rows,
        cols,
        content: Content::Sub {
            child: Box::new(block),
            h_align,
            v_align,
        },
        annotation: None,
    }
}

/// Widen (or crop) to `cols`, positioning content per `align`.
pub fn align_horiz<A>(align: Alignment, cols: usize, block: Block<A>) -> Block<A> {
    let rows = block.rows;
    align_block(align, Alignment::First, rows, cols, block)
}

/// Heighten (or crop) to `rows`, positioning content per `align`.
pub fn align_vert<A>(align: Alignment, rows: usize, block: Block<A>) -> Block<A> {
    let cols = block.cols;
    align_block(Alignment::First, align, rows, cols, block)
}

/// Grow the block `n` rows taller, content anchored at the top.
pub fn move_up<A>(n: usize, block: Block<A>) -> Block<A> {
    let rows = block.rows.saturating_add(n);
    align_vert(Alignment::First, rows, block)
}

/// Grow the block `n` rows taller, content anchored at the bottom.
pub fn move_down<A>(n: usize, block: Block<A>) -> Block<A> {
    let rows = block.rows.saturating_add(n);
    align_vert(Alignment::Last, rows, block)
}

/// Grow the block `n` columns wider, content anchored at the left edge.
pub fn move_left<A>(n: usize, block: Block<A>) -> Block<A> {
    let cols = block.cols.saturating_add(n);
    align_horiz(Alignment::First, cols, block)
}

/// Grow the block `n` columns wider, content anchored at the right edge.
pub fn move_right<A>(n: usize, block: Block<A>) -> Block<A> {
    let cols = block.cols.saturating_add(n);
    align_horiz(Alignment::Last, cols, block)
}

/// [`hcat`] with `separator` interspersed between the blocks.
pub fn punctuate_h<A: Clone>(
    align: Alignment,
    separator: Block<A>,
    blocks: Vec<Block<A>>,
) -> Block<A> {
    hcat(align, intersperse(separator, blocks))
}

/// [`vcat`] with `separator` interspersed between the blocks.
pub fn punctuate_v<A: Clone>(
    align: Alignment,
    separator: Block<A>,
    blocks: Vec<Block<A>>,
) -> Block<A> {
    vcat(align, intersperse(separator, blocks))
}

fn intersperse<A: Clone>(separator: Block<A>, blocks: Vec<Block<A>>) -> Vec<Block<A>> {
    let mut out = Vec::with_capacity(blocks.len().saturating_mul(2));
    for (idx, block) in blocks.into_iter().enumerate() {
        if idx > 0 {
            out.push(separator.clone());
        }
        out.push(block);
    }
    out
}

/// Attach `payload` to the block.
///
/// A node carries at most one annotation, so an already-annotated block is
/// first wrapped in a same-size window and the payload lands on the wrapper.
pub fn annotate<A>(block: Block<A>, payload: A) -> Block<A> {
    let mut target = if block.annotation.is_some() {
        let (rows, cols) = (block.rows, block.cols);
        align_block(Alignment::First, Alignment::First, rows, cols, block)
    } else {
        block
    };
    target.annotation = Some(Annotation(payload));
    target
}

/// Shallow copy without the root annotation.
pub fn un_annotate<A>(mut block: Block<A>) -> Block<A> {
    block.annotation = None;
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Block<()> {
        text(s)
    }

    #[test]
    fn text_splits_lines_and_measures_naturally() {
        let block = plain("ab\ncdef");
        assert_eq!(block.rows(), 2);
        assert_eq!(block.cols(), 4);
        assert_eq!(plain("").rows(), 0);
    }

    #[test]
    fn text_width_is_display_width() {
        let block: Block<()> = text("你好");
        assert_eq!(block.cols(), 4);
        let styled: Block<()> = text("\x1b[31mred\x1b[0m");
        assert_eq!(styled.cols(), 3);
    }

    #[test]
    fn hcat_sums_cols_and_takes_max_rows() {
        let block = hcat(Alignment::First, vec![plain("ab\ncd"), plain("xyz")]);
        assert_eq!(block.rows(), 2);
        assert_eq!(block.cols(), 5);
        let Content::Row(children) = block.content() else {
            panic!("expected row content");
        };
        assert!(children.iter().all(|child| child.rows() == 2));
    }

    #[test]
    fn vcat_sums_rows_and_takes_max_cols() {
        let block = vcat(Alignment::First, vec![plain("ab"), plain("wxyz")]);
        assert_eq!(block.rows(), 2);
        assert_eq!(block.cols(), 4);
        let Content::Col(children) = block.content() else {
            panic!("expected col content");
        };
        assert!(children.iter().all(|child| child.cols() == 4));
    }

    #[test]
    fn moves_grow_by_wrapping() {
        let block = move_right(3, plain("ab"));
        assert_eq!(block.cols(), 5);
        assert_eq!(block.rows(), 1);
        let block = move_down(2, plain("ab"));
        assert_eq!(block.rows(), 3);
    }

    #[test]
    fn annotate_wraps_when_already_annotated() {
        let once = annotate(plain("x"), ());
        assert!(once.is_annotated());
        let twice = annotate(once, ());
        assert!(matches!(twice.content(), Content::Sub { .. }));
        assert_eq!(twice.rows(), 1);
        assert_eq!(twice.cols(), 1);
    }

    #[test]
    fn un_annotate_strips_only_the_root() {
        let block = un_annotate(annotate(plain("x"), ()));
        assert!(!block.is_annotated());
    }

    #[test]
    fn re_annotate_requires_annotation() {
        let block: Block<u8> = text("x");
        assert!(block.re_annotate(&|n| n + 1).is_err());
        let mapped = annotate(text("x"), 1_u8).re_annotate(&|n| n + 1).unwrap();
        assert_eq!(mapped.payload(), Some(&2));
    }

    #[test]
    fn alter_annotations_fans_out() {
        let block = annotate(text("x"), 1_u8);
        let variants = block.alter_annotations(&|n| vec![*n, n + 1]).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].payload(), Some(&1));
        assert_eq!(variants[1].payload(), Some(&2));
        assert!(null_block::<u8>().alter_annotations(&|n| vec![*n]).is_err());
    }

    #[test]
    fn punctuate_intersperses() {
        let block = punctuate_h(
            Alignment::First,
            character('|'),
            vec![plain("a"), plain("b"), plain("c")],
        );
        assert_eq!(block.cols(), 5);
    }

    #[test]
    fn blocks_compare_structurally() {
        assert_eq!(plain("ab"), plain("ab"));
        assert_ne!(plain("ab"), plain("ba"));
        assert_eq!(annotate(text::<u8>("x"), 1_u8), annotate(text::<u8>("x"), 1_u8));
        assert_ne!(annotate(text::<u8>("x"), 1_u8), annotate(text::<u8>("x"), 2_u8));
    }
}
