//! Abstract interfaces over sparse integer matrices

pub mod matrix;

pub use matrix::{MatrixOperations, SparseMatrix};
