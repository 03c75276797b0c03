use indexmap::IndexMap;
use serde::Serialize;

/// Per-resource-type slice of the analysis.
///
/// Field order matters: it is the serialization order of the JSON dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBreakdown {
    pub count: usize,
    pub description: String,
    /// Share of the total, rounded to two decimal places.
    pub percentage: f64,
}

/// The aggregation derived from one scan.
///
/// All maps are insertion-ordered (`IndexMap`) so the JSON dump reads in
/// the same order as the text report: resource types and top-N maps by
/// descending count, the subscription distribution in first-encountered
/// order. Top-level field order matches the published JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceAnalysis {
    pub total_resources: usize,
    pub resource_types: IndexMap<String, TypeBreakdown>,
    pub top_locations: IndexMap<String, usize>,
    pub top_resource_groups: IndexMap<String, usize>,
    pub subscription_distribution: IndexMap<String, usize>,
    pub subscriptions_scanned: Vec<String>,
}

impl ResourceAnalysis {
    /// The zero-valued analysis for a scan that found nothing.
    pub fn empty(subscriptions_scanned: Vec<String>) -> Self {
        Self {
            total_resources: 0,
            resource_types: IndexMap::new(),
            top_locations: IndexMap::new(),
            top_resource_groups: IndexMap::new(),
            subscription_distribution: IndexMap::new(),
            subscriptions_scanned,
        }
    }

    pub fn unique_type_count(&self) -> usize {
        self.resource_types.len()
    }
}
