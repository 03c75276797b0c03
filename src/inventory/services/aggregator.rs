use crate::inventory::domain::{Resource, ResourceAnalysis, TypeBreakdown};
use crate::inventory::services::DescriptionTable;
use indexmap::IndexMap;

/// Truncation limit for the location and resource-group tables.
const TOP_ENTRY_LIMIT: usize = 10;

/// Aggregates a resource list into a `ResourceAnalysis`.
///
/// Four independent frequency tables are built in one pass each: every
/// distinct resource type (untruncated), the top ten locations, the top
/// ten resource groups, and the full per-subscription distribution.
/// Percentages are rounded half-away-from-zero to two decimal places, so
/// the per-type shares sum to 100 within rounding.
pub fn analyze(
    resources: &[Resource],
    descriptions: &DescriptionTable,
    targets: &[String],
) -> ResourceAnalysis {
    if resources.is_empty() {
        return ResourceAnalysis::empty(targets.to_vec());
    }

    let total = resources.len();

    let type_counts = tally(resources.iter().map(|r| r.resource_type.as_str()));
    let location_counts = tally(resources.iter().map(|r| r.location.as_str()));
    let group_counts = tally(resources.iter().map(|r| r.resource_group.as_str()));
    let subscription_counts = tally(resources.iter().map(|r| r.subscription_id.as_str()));

    let resource_types = most_common(type_counts, None)
        .into_iter()
        .map(|(resource_type, count)| {
            let breakdown = TypeBreakdown {
                count,
                description: descriptions.describe(&resource_type).to_string(),
                percentage: round2(count as f64 / total as f64 * 100.0),
            };
            (resource_type, breakdown)
        })
        .collect();

    ResourceAnalysis {
        total_resources: total,
        resource_types,
        top_locations: most_common(location_counts, Some(TOP_ENTRY_LIMIT)),
        top_resource_groups: most_common(group_counts, Some(TOP_ENTRY_LIMIT)),
        subscription_distribution: subscription_counts,
        subscriptions_scanned: targets.to_vec(),
    }
}

/// Single-pass frequency count, keyed in first-encountered order.
fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for key in keys {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Reorders a frequency table by descending count, optionally truncating.
/// The sort is stable, so equal counts keep first-encountered order.
fn most_common(counts: IndexMap<String, usize>, limit: Option<usize>) -> IndexMap<String, usize> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries.into_iter().collect()
}

/// Rounds to two decimal places, half away from zero (f64::round).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
