use serde::{Deserialize, Serialize};

/// A single user-group entry read from the export CSV.
///
/// The export carries exactly two columns, `Name` and `Id`. Either field
/// may be absent in malformed rows; both default to the empty string so a
/// short row never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRow {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Id", default)]
    pub id: String,
}

impl GroupRow {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
