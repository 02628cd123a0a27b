//! Grid reordering.
//!
//! A grid is a row-major list whose rows wrap at a fixed column count for
//! display. Moves therefore use list semantics; [`GridShape`] only converts
//! between flat indices and cells for hosts laying the grid out.

use crate::error::DragResult;

use super::list;

/// Move the cell at `from` to flat index `to`. Same semantics as
/// [`list::move_item`].
pub fn move_cell<T: Clone>(items: &[T], from: usize, to: usize) -> DragResult<Vec<T>> {
    list::move_item(items, from, to)
}

/// Column wrapping of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
}

impl GridShape {
    /// Create a shape with at least one column.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    /// `(row, column)` of a flat index.
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    pub fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.columns + column.min(self.columns - 1)
    }

    /// Number of rows needed for `len` items.
    pub fn rows_for(&self, len: usize) -> usize {
        len.div_ceil(self.columns)
    }
}
