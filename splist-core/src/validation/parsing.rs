//! Parsing utilities for the textual matrix format
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,1)
//! (2,1,-4)
//! ```

use crate::{Entry, SplistError};

/// Header key of a dimension line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKey {
    Rows,
    Cols,
}

impl DimensionKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            DimensionKey::Rows => "rows",
            DimensionKey::Cols => "cols",
        }
    }
}

/// Parse a header line of the form `rows=<n>` or `cols=<n>`
///
/// Whitespace around the key and the number is ignored.
pub fn parse_dimension(line: &str, key: DimensionKey) -> Result<usize, SplistError> {
    let (name, value) = line.split_once('=').ok_or(SplistError::Format)?;

    if name.trim() != key.as_str() {
        return Err(SplistError::Format);
    }

    parse_field(value)
}

/// Parse an entry line of the form `(row,col,value)`
///
/// Zero values are returned as-is; skipping them is up to the caller.
pub fn parse_entry_line(line: &str) -> Result<Entry, SplistError> {
    let inner = line
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(SplistError::Format)?;

    let mut fields = inner.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(SplistError::Format);
    };

    Ok(Entry::new(parse_field(row)?, parse_field(col)?, parse_field(value)?))
}

fn parse_field<T: core::str::FromStr>(s: &str) -> Result<T, SplistError> {
    s.trim().parse().map_err(|_| SplistError::Format)
}
