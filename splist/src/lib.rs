//! splist - sparse integer matrices stored as lists of nonzero entries
//!
//! This library adds file I/O and operation dispatch on top of
//! `splist-core`, and ships the `splist` command-line calculator.
//!
//! ## Architecture
//!
//! - **splist-core**: the entry list, its algebra and the text format (no I/O)
//! - **splist**: file loading/saving, operation dispatch, CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splist::{MatrixFile, Operation};
//!
//! fn example() -> splist::Result<()> {
//!     let a = MatrixFile::read("a.txt")?;
//!     let b = MatrixFile::read("b.txt")?;
//!
//!     let product = "multiply".parse::<Operation>()?.apply(&a, &b)?;
//!     for entry in &product {
//!         println!("{entry}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Text format
//!
//! ```text
//! rows=2
//! cols=2
//! (0,0,1)
//! (1,1,2)
//! ```

// Re-export core abstractions
pub use splist_core::{
    // Core types
    Entries, Entry, SparseEntryList,
    // Traits
    MatrixOperations, SparseMatrix,
    // Error handling
    OperationKind, Result, SplistError,
};

pub mod file_io;
pub mod operation;

pub use file_io::MatrixFile;
pub use operation::Operation;
