use crate::inventory::domain::ResourceAnalysis;
use crate::ports::outbound::AnalysisStore;
use crate::shared::error::EstateError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// JsonAnalysisWriter adapter for persisting the analysis as JSON
///
/// Writes a pretty-printed document whose key order follows the analysis
/// maps (descending count for types and top-N tables). serde_json leaves
/// non-ASCII characters unescaped, so names survive verbatim.
pub struct JsonAnalysisWriter;

impl JsonAnalysisWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(EstateError::FileWrite {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for JsonAnalysisWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisStore for JsonAnalysisWriter {
    fn save(&self, analysis: &ResourceAnalysis, path: &Path) -> Result<()> {
        Self::validate_parent_directory(path)?;

        let document =
            serde_json::to_string_pretty(analysis).map_err(|e| EstateError::FileWrite {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        fs::write(path, document).map_err(|e| EstateError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
