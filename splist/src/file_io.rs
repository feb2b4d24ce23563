//! Loading and saving matrices in the text format
//!
//! Files are read completely into memory and closed before parsing starts.

use std::{fs, io, path::Path};

use log::{debug, warn};
use splist_core::{SparseEntryList, SplistError};

/// File-level entry points for the `rows=`/`cols=` text format
pub struct MatrixFile;

impl MatrixFile {
    /// Read and parse a matrix file
    ///
    /// An unreadable file reports the same [`SplistError::Format`] as a
    /// malformed one; the I/O cause is logged.
    pub fn read<P: AsRef<Path>>(path: P) -> splist_core::Result<SparseEntryList> {
        let path = path.as_ref();

        let source = fs::read_to_string(path).map_err(|err| {
            warn!("failed to read {}: {err}", path.display());
            SplistError::Format
        })?;

        let matrix = source.parse::<SparseEntryList>().map_err(|err| {
            debug!("failed to parse {}: {err}", path.display());
            err
        })?;

        debug!(
            "loaded {}: {} x {}, {} entries",
            path.display(),
            matrix.nrows(),
            matrix.ncols(),
            matrix.len()
        );
        Ok(matrix)
    }

    /// Write a matrix in the text format, replacing any existing file
    pub fn write<P: AsRef<Path>>(matrix: &SparseEntryList, path: P) -> io::Result<()> {
        let path = path.as_ref();
        fs::write(path, matrix.to_string())?;
        debug!("wrote {} entries to {}", matrix.len(), path.display());
        Ok(())
    }
}
