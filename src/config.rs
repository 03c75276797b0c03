//! Description-override file support for resource-report.
//!
//! An optional TOML file can replace or extend the built-in resource-type
//! descriptions:
//!
//! ```toml
//! [descriptions]
//! "Microsoft.Cache/Redis" = "Session cache for the storefront"
//! "Contoso.Widgets/frobnicators" = "In-house widget service"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

/// Schema of the override file.
#[derive(Debug, Deserialize, Default)]
pub struct DescriptionsFile {
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

/// Load description overrides from an explicit path. Returns an error if
/// the file is missing or malformed.
pub fn load_descriptions_from_path(path: &Path) -> Result<DescriptionsFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read descriptions file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let file: DescriptionsFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse descriptions file: {}\n\n💡 Hint: Ensure the file contains a [descriptions] table of string pairs.",
            path.display()
        )
    })?;

    Ok(file)
}
