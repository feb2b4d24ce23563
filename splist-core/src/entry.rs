//! Stored matrix cell

/// One nonzero cell of a sparse matrix
///
/// `value` is never zero while the entry is held by a
/// [`SparseEntryList`](crate::SparseEntryList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Cell value
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Whether this entry sits at `(row, col)`
    #[inline]
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}

impl From<(usize, usize, i64)> for Entry {
    fn from((row, col, value): (usize, usize, i64)) -> Self {
        Self::new(row, col, value)
    }
}

impl From<Entry> for (usize, usize, i64) {
    fn from(entry: Entry) -> Self {
        (entry.row, entry.col, entry.value)
    }
}

/// Console form, `(row, col, value)`
impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
