//! Error types for sparse entry list operations

/// Algebraic operation that rejected its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
}

impl core::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            OperationKind::Addition => "addition",
            OperationKind::Subtraction => "subtraction",
            OperationKind::Multiplication => "multiplication",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while loading or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplistError {
    /// Malformed textual matrix description
    ///
    /// Every parse failure collapses into this one variant.
    Format,
    /// Operand dimensions are incompatible for the operation
    DimensionMismatch(OperationKind),
    /// Checked integer arithmetic overflowed at the given cell
    Overflow { row: usize, col: usize },
    /// Operation name is not one of `add`, `subtract`, `multiply`
    UnknownOperation,
}

impl core::fmt::Display for SplistError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SplistError::Format => write!(f, "Input file has wrong format"),
            SplistError::DimensionMismatch(kind) => {
                write!(f, "Matrix dimensions do not match for {kind}")
            }
            SplistError::Overflow { row, col } => {
                write!(f, "Integer overflow while computing element ({row}, {col})")
            }
            SplistError::UnknownOperation => write!(
                f,
                "Invalid operation. Choose from 'add', 'subtract', 'multiply'."
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SplistError {}

/// Result type for sparse entry list operations
pub type Result<T> = core::result::Result<T, SplistError>;
