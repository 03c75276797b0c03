use crate::filtering::domain::GroupRow;

/// Environment markers that identify non-production entries.
///
/// Matching is case-sensitive and substring-based, so both "App-DEV-01"
/// and "MyDevTeam" are excluded by the `Dev` marker.
const ENVIRONMENT_MARKERS: [&str; 14] = [
    "DV", "DEV", "UAT", "SB", "DIT", "PT", "SIT", "Dev", "UA", "QA", "Test", "Sandbox",
    "SANDBOX", "SandBox",
];

/// EnvironmentFilter - excludes rows whose name carries an environment marker
///
/// A row is excluded when ANY marker occurs anywhere in its name. Names are
/// stripped of a single leading byte-order-mark artifact before matching;
/// rows with a missing or empty name carry no marker and always pass
/// through (fail-open).
#[derive(Debug)]
pub struct EnvironmentFilter {
    markers: Vec<String>,
}

impl EnvironmentFilter {
    /// Creates a filter with the built-in production marker set.
    pub fn production() -> Self {
        Self {
            markers: ENVIRONMENT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Creates a filter with the built-in markers plus caller-supplied extras.
    pub fn with_extra_markers(extra: Vec<String>) -> Self {
        let mut filter = Self::production();
        filter.markers.extend(extra);
        filter
    }

    /// Strips a single leading U+FEFF artifact from a name.
    pub fn strip_bom(name: &str) -> &str {
        name.strip_prefix('\u{feff}').unwrap_or(name)
    }

    /// Returns true when the BOM-stripped name contains any marker.
    pub fn is_excluded(&self, name: &str) -> bool {
        let name = Self::strip_bom(name);
        self.markers.iter().any(|marker| name.contains(marker.as_str()))
    }

    /// Splits rows into (kept, excluded), preserving relative order on
    /// both sides. Rows are returned unchanged; BOM stripping only affects
    /// the match, not the data.
    pub fn partition(&self, rows: Vec<GroupRow>) -> (Vec<GroupRow>, Vec<GroupRow>) {
        rows.into_iter()
            .partition(|row| !self.is_excluded(&row.name))
    }
}
