#![no_std]

//! splist core - sparse matrices as an ordered list of nonzero entries
//!
//! This crate holds the in-memory representation, the algebra over it and
//! the text format definitions. It performs no I/O.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entry;
pub mod error;
pub mod list;
pub mod traits;
pub mod validation;

pub use entry::Entry;
pub use error::*;
pub use list::{Entries, SparseEntryList};
pub use traits::{MatrixOperations, SparseMatrix};
pub use validation::{parse_dimension, parse_entry_line, DimensionKey};
