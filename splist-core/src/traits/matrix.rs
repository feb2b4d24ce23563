//! Core matrix abstraction traits
//!
//! These are pure interfaces; [`SparseEntryList`](crate::SparseEntryList)
//! is the implementation shipped with this crate.

use alloc::vec::Vec;

/// Format-agnostic read access to a sparse integer matrix
pub trait SparseMatrix {
    /// Get the value at the specified position
    ///
    /// Cells that are not stored read as zero.
    fn get_element(&self, row: usize, col: usize) -> i64;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Number of stored cells relative to the full matrix, in `[0, 1]`
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        if rows == 0 || cols == 0 {
            return 0.0;
        }
        self.nnz() as f64 / (rows as f64 * cols as f64)
    }
}

/// Row/column slicing on top of [`SparseMatrix`]
pub trait MatrixOperations: SparseMatrix {
    /// Get all non-zero `(col, value)` pairs in a row, in storage order
    fn get_row(&self, row_index: usize) -> Vec<(usize, i64)>;

    /// Get all non-zero `(row, value)` pairs in a column, in storage order
    fn get_col(&self, col_index: usize) -> Vec<(usize, i64)>;
}
