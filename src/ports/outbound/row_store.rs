use crate::filtering::domain::GroupRow;
use crate::shared::Result;
use std::path::Path;

/// GroupRowSource port for reading user-group rows
///
/// Abstracts the record source the filter pipeline consumes. The source
/// is finite and read in one pass.
pub trait GroupRowSource {
    /// Reads all rows from the given path, in file order.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The input file does not exist (`EstateError::SourceNotFound`)
    /// - The file cannot be read or parsed (`EstateError::CsvProcessing`)
    fn read_rows(&self, path: &Path) -> Result<Vec<GroupRow>>;
}

/// GroupRowSink port for writing surviving rows
pub trait GroupRowSink {
    /// Writes the header row and the given rows, in order.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn write_rows(&self, path: &Path, rows: &[GroupRow]) -> Result<()>;
}
