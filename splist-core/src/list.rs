//! Sparse matrix stored as an ordered list of nonzero entries
//!
//! [`SparseEntryList`] keeps exactly the nonzero cells of a logical integer
//! matrix, at most one [`Entry`] per `(row, col)`, in insertion order.
//! [`SparseEntryList::set_element`] is the only mutation path, so a stored
//! zero can never appear. The algebra (`add`, `subtract`, `multiply`) is
//! built on `get_element`/`set_element` and always returns a fresh list.

use alloc::vec::Vec;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::traits::{MatrixOperations, SparseMatrix};
use crate::validation::{parse_dimension, parse_entry_line, DimensionKey};
use crate::{Entry, OperationKind, Result, SplistError};

/// Sparse integer matrix backed by a list of nonzero entries
///
/// Equality compares dimensions and entries in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SparseEntryList {
    nrows: usize,
    ncols: usize,
    entries: Vec<Entry>,
}

impl SparseEntryList {
    /// Create an empty matrix with fixed dimensions
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: Vec::new(),
        }
    }

    /// Build a matrix by feeding every entry through [`Self::set_element`]
    pub fn from_entries<I>(nrows: usize, ncols: usize, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        let mut list = Self::new(nrows, ncols);
        list.extend(entries.into_iter().map(Into::into));
        list
    }

    /// Parse the textual `rows=`/`cols=`/`(row,col,value)` description
    ///
    /// Any malformed input yields [`SplistError::Format`]. Entries with a
    /// zero value are skipped; a repeated cell keeps the last value.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut lines = source.lines().map(str::trim).filter(|line| !line.is_empty());

        let nrows = parse_dimension(lines.next().ok_or(SplistError::Format)?, DimensionKey::Rows)?;
        let ncols = parse_dimension(lines.next().ok_or(SplistError::Format)?, DimensionKey::Cols)?;

        let mut list = Self::new(nrows, ncols);
        for line in lines {
            let entry = parse_entry_line(line)?;
            if entry.value != 0 {
                list.set_element(entry.row, entry.col, entry.value);
            }
        }

        Ok(list)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (nonzero) entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in storage order
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Stored entries as a slice, in storage order
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    fn position(&self, row: usize, col: usize) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_at(row, col))
    }

    /// Value at `(row, col)`, zero when no entry is stored
    pub fn get_element(&self, row: usize, col: usize) -> i64 {
        self.entries
            .iter()
            .find(|entry| entry.is_at(row, col))
            .map_or(0, |entry| entry.value)
    }

    /// Write `value` at `(row, col)`
    ///
    /// Zero removes an existing entry (or does nothing), a nonzero value
    /// overwrites in place or appends a new entry.
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) {
        match (self.position(row, col), value) {
            (Some(index), 0) => {
                self.entries.remove(index);
            }
            (Some(index), _) => self.entries[index].value = value,
            (None, 0) => {}
            (None, _) => self.entries.push(Entry::new(row, col, value)),
        }
    }

    /// Element-wise sum; dimensions must match exactly
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, OperationKind::Addition, i64::checked_add)
    }

    /// Element-wise difference; dimensions must match exactly
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, OperationKind::Subtraction, i64::checked_sub)
    }

    fn combine(
        &self,
        other: &Self,
        kind: OperationKind,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(SplistError::DimensionMismatch(kind));
        }

        let mut result = Self::from_entries(self.nrows, self.ncols, self);
        for entry in other {
            let current = result.get_element(entry.row, entry.col);
            let value = op(current, entry.value).ok_or(SplistError::Overflow {
                row: entry.row,
                col: entry.col,
            })?;
            result.set_element(entry.row, entry.col, value);
        }

        Ok(result)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.ncols() == other.nrows()`; the result is
    /// `self.nrows() x other.ncols()`. Entry pairs are visited in the same
    /// order as a nested scan over both lists, so the output order matches
    /// that scan exactly.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.ncols != other.nrows {
            return Err(SplistError::DimensionMismatch(OperationKind::Multiplication));
        }

        // row of `other` -> its entries, in storage order
        let mut rows: HashMap<usize, Vec<Entry>> = HashMap::new();
        for entry in other {
            rows.entry(entry.row).or_default().push(entry);
        }

        let mut result = Self::new(self.nrows, other.ncols);
        for a in self {
            let Some(matches) = rows.get(&a.col) else {
                continue;
            };
            for b in matches {
                let value = a
                    .value
                    .checked_mul(b.value)
                    .and_then(|product| result.get_element(a.row, b.col).checked_add(product))
                    .ok_or(SplistError::Overflow {
                        row: a.row,
                        col: b.col,
                    })?;
                result.set_element(a.row, b.col, value);
            }
        }

        Ok(result)
    }
}

/// Iterator over the entries of a [`SparseEntryList`] in storage order
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: core::slice::Iter<'a, Entry>,
}

impl Iterator for Entries<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Entry> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a SparseEntryList {
    type Item = Entry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Entries<'a> {
        self.iter()
    }
}

impl Extend<Entry> for SparseEntryList {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.set_element(entry.row, entry.col, entry.value);
        }
    }
}

impl FromStr for SparseEntryList {
    type Err = SplistError;

    fn from_str(source: &str) -> Result<Self> {
        Self::from_source(source)
    }
}

/// Renders the text format accepted by [`SparseEntryList::from_source`]
impl core::fmt::Display for SparseEntryList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "rows={}", self.nrows)?;
        writeln!(f, "cols={}", self.ncols)?;
        for entry in self {
            writeln!(f, "({},{},{})", entry.row, entry.col, entry.value)?;
        }
        Ok(())
    }
}

impl SparseMatrix for SparseEntryList {
    fn get_element(&self, row: usize, col: usize) -> i64 {
        SparseEntryList::get_element(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseEntryList::dimensions(self)
    }

    fn nnz(&self) -> usize {
        self.len()
    }
}

impl MatrixOperations for SparseEntryList {
    fn get_row(&self, row_index: usize) -> Vec<(usize, i64)> {
        self.iter()
            .filter(|entry| entry.row == row_index)
            .map(|entry| (entry.col, entry.value))
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, i64)> {
        self.iter()
            .filter(|entry| entry.col == col_index)
            .map(|entry| (entry.row, entry.value))
            .collect()
    }
}

impl core::ops::Add for &SparseEntryList {
    type Output = Result<SparseEntryList>;

    fn add(self, rhs: Self) -> Self::Output {
        SparseEntryList::add(self, rhs)
    }
}

impl core::ops::Sub for &SparseEntryList {
    type Output = Result<SparseEntryList>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl core::ops::Mul for &SparseEntryList {
    type Output = Result<SparseEntryList>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}
