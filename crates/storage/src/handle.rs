//! Detached subtable handles.
//!
//! A `SubtableHandle` names a subtable cell without borrowing the parent
//! table. Resolving it re-checks that the row it was taken from still exists
//! and that the parent's schema has not changed since.

/// Per-table identity of a row. Assigned in insertion order and never reused.
pub type RowId = u64;

/// Reference to the subtable at a `(column, row)` cell of a parent table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubtableHandle {
    column: usize,
    row: usize,
    row_id: RowId,
    schema_epoch: u64,
}

impl SubtableHandle {
    pub(crate) fn new(column: usize, row: usize, row_id: RowId, schema_epoch: u64) -> Self {
        Self {
            column,
            row,
            row_id,
            schema_epoch,
        }
    }

    /// Column index of the subtable cell.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Row index of the subtable cell at the time the handle was taken.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    #[inline]
    pub(crate) fn schema_epoch(&self) -> u64 {
        self.schema_epoch
    }
}
