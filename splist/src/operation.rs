//! Named algebraic operations
//!
//! Maps the `add`/`subtract`/`multiply` names used on the command line to
//! the matching [`SparseEntryList`] method.

use std::{fmt, str::FromStr};

use log::debug;
use splist_core::{OperationKind, Result, SparseEntryList, SplistError};

/// Binary operation on two matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Command-line name of the operation
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    pub const fn kind(self) -> OperationKind {
        match self {
            Operation::Add => OperationKind::Addition,
            Operation::Subtract => OperationKind::Subtraction,
            Operation::Multiply => OperationKind::Multiplication,
        }
    }

    /// Apply the operation, returning a new matrix
    pub fn apply(self, lhs: &SparseEntryList, rhs: &SparseEntryList) -> Result<SparseEntryList> {
        debug!(
            "{}: {} x {} with {} x {}",
            self.kind(),
            lhs.nrows(),
            lhs.ncols(),
            rhs.nrows(),
            rhs.ncols()
        );

        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl FromStr for Operation {
    type Err = SplistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or(SplistError::UnknownOperation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!("subtract".parse(), Ok(Operation::Subtract));
        assert_eq!("multiply".parse(), Ok(Operation::Multiply));

        // Names are exact
        assert_eq!("Add".parse::<Operation>(), Err(SplistError::UnknownOperation));
        assert_eq!("divide".parse::<Operation>(), Err(SplistError::UnknownOperation));
        assert_eq!("".parse::<Operation>(), Err(SplistError::UnknownOperation));
    }

    #[test]
    fn test_display_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse(), Ok(op));
        }
    }

    #[test]
    fn test_apply() {
        let a = SparseEntryList::from_entries(2, 2, [(0, 0, 1), (1, 1, 2)]);
        let b = SparseEntryList::from_entries(2, 2, [(0, 0, 3), (0, 1, 4)]);

        assert_eq!(Operation::Add.apply(&a, &b), a.add(&b));
        assert_eq!(Operation::Subtract.apply(&a, &b), a.subtract(&b));
        assert_eq!(Operation::Multiply.apply(&a, &b), a.multiply(&b));

        let c = SparseEntryList::new(3, 2);
        assert_eq!(
            Operation::Multiply.apply(&a, &c),
            Err(SplistError::DimensionMismatch(OperationKind::Multiplication))
        );
    }
}
