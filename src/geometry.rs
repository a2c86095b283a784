/// Rectangle anchored within the rendered character grid, measured in cells.
///
/// `row`/`col` are zero-based offsets from the top-left corner of the render;
/// `rows`/`cols` are the extent. Produced by the position-tracking walk in
/// [`crate::reactive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Rect {
    pub const fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    /// First row below the rectangle.
    pub fn bottom(&self) -> usize {
        self.row.saturating_add(self.rows)
    }

    /// First column to the right of the rectangle.
    pub fn right(&self) -> usize {
        self.col.saturating_add(self.cols)
    }
}
