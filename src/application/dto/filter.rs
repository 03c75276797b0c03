use std::path::PathBuf;

/// FilterRequest - Internal request DTO for the row-filter use case
#[derive(Debug, Clone)]
pub struct FilterRequest {
    /// Path to the exported user-group CSV
    pub input_path: PathBuf,
    /// Path the surviving rows are written to
    pub output_path: PathBuf,
}

impl FilterRequest {
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
        }
    }
}

/// FilterSummary - outcome of one filter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    /// Rows read from the source
    pub total: usize,
    /// Rows excluded by the environment predicate
    pub excluded: usize,
    /// Rows written to the output (0 means the output was not touched)
    pub written: usize,
}

impl FilterSummary {
    pub fn wrote_output(&self) -> bool {
        self.written > 0
    }
}
