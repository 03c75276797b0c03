use crate::inventory::domain::ResourceAnalysis;
use crate::shared::Result;
use std::path::Path;

/// AnalysisStore port for persisting a scan's aggregation
pub trait AnalysisStore {
    /// Serializes the analysis to the given path.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails; callers
    /// treat persistence failures as non-fatal.
    fn save(&self, analysis: &ResourceAnalysis, path: &Path) -> Result<()>;
}
