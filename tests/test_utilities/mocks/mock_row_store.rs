use azure_estate::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock GroupRowSource for testing
pub struct MockRowSource {
    pub rows: Vec<GroupRow>,
    pub should_fail: bool,
}

impl MockRowSource {
    pub fn new(rows: Vec<GroupRow>) -> Self {
        Self {
            rows,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: true,
        }
    }
}

impl GroupRowSource for MockRowSource {
    fn read_rows(&self, _path: &Path) -> Result<Vec<GroupRow>> {
        if self.should_fail {
            anyhow::bail!("Mock row source failure");
        }
        Ok(self.rows.clone())
    }
}

/// Mock GroupRowSink that records what was written.
/// Clones share the recording, so a test can keep a handle after the
/// sink moves into a use case.
#[derive(Clone)]
pub struct MockRowSink {
    written: Arc<Mutex<Option<Vec<GroupRow>>>>,
    should_fail: bool,
}

impl MockRowSink {
    pub fn new() -> Self {
        Self {
            written: Arc::new(Mutex::new(None)),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            written: Arc::new(Mutex::new(None)),
            should_fail: true,
        }
    }

    pub fn written_rows(&self) -> Option<Vec<GroupRow>> {
        self.written.lock().unwrap().clone()
    }
}

impl GroupRowSink for MockRowSink {
    fn write_rows(&self, _path: &Path, rows: &[GroupRow]) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock row sink failure");
        }
        *self.written.lock().unwrap() = Some(rows.to_vec());
        Ok(())
    }
}
