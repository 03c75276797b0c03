use crate::filtering::domain::GroupRow;
use crate::ports::outbound::{GroupRowSink, GroupRowSource};
use crate::shared::error::EstateError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// UTF-8 byte-order mark, tolerated at the start of input files.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// CsvGroupStore adapter for reading and writing user-group CSVs
///
/// Implements both GroupRowSource and GroupRowSink. Input files exported
/// from the portal often start with a UTF-8 BOM; the reader strips it
/// before handing the bytes to the CSV parser. The writer emits the fixed
/// `Name,Id` header followed by the rows in the order given.
pub struct CsvGroupStore;

impl CsvGroupStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvGroupStore {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

impl GroupRowSource for CsvGroupStore {
    fn read_rows(&self, path: &Path) -> Result<Vec<GroupRow>> {
        if !path.exists() {
            return Err(EstateError::SourceNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Export the user groups to \"{}\" first, or point --input at the export.",
                    path.display()
                ),
            }
            .into());
        }

        let bytes = fs::read(path).map_err(|e| EstateError::CsvProcessing {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(strip_utf8_bom(&bytes));

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: GroupRow = record.map_err(|e| EstateError::CsvProcessing {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
            rows.push(row);
        }
        Ok(rows)
    }
}

impl GroupRowSink for CsvGroupStore {
    fn write_rows(&self, path: &Path, rows: &[GroupRow]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| EstateError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        for row in rows {
            writer.serialize(row).map_err(|e| EstateError::FileWrite {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        }

        writer.flush().map_err(|e| EstateError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
