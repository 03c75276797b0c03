use serde::{Deserialize, Serialize};

/// Resource group used when an ARM id is too short to carry one.
const UNKNOWN_RESOURCE_GROUP: &str = "Unknown";

/// A single Azure resource, tagged with its owning subscription.
///
/// Immutable once listed; the in-memory resource list is built once per
/// scan and consumed by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub location: String,
    pub resource_group: String,
    pub subscription_id: String,
}

impl Resource {
    /// Builds a resource from a raw ARM listing entry, extracting the
    /// resource group from the hierarchical id.
    pub fn from_listing(
        id: &str,
        resource_type: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            location: location.into(),
            resource_group: resource_group_from_id(id),
            subscription_id: subscription_id.into(),
        }
    }
}

/// Extracts the resource group from an ARM-style resource id.
///
/// Ids look like `/subscriptions/{sub}/resourceGroups/{rg}/providers/...`;
/// split on `/`, the group name is segment index 4. Ids with fewer than
/// five segments yield the literal `"Unknown"`.
pub fn resource_group_from_id(id: &str) -> String {
    id.split('/')
        .nth(4)
        .map(|segment| segment.to_string())
        .unwrap_or_else(|| UNKNOWN_RESOURCE_GROUP.to_string())
}
