//! Text format validation
//!
//! Pure line-level parsers for the `rows=`/`cols=` matrix description.
//! Every failure maps to [`SplistError::Format`](crate::SplistError::Format).

pub mod parsing;

pub use parsing::{parse_dimension, parse_entry_line, DimensionKey};
