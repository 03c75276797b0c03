use crate::inventory::domain::ResourceAnalysis;

/// ScanRequest - Internal request DTO for the inventory-scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Target subscription display names or ids, in caller order
    pub targets: Vec<String>,
}

impl ScanRequest {
    pub fn new(targets: Vec<String>) -> Self {
        Self { targets }
    }
}

/// ScanResponse - outcome of one inventory scan
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// The aggregation over every listed resource
    pub analysis: ResourceAnalysis,
    /// Subscription ids that were actually scanned
    pub resolved_subscriptions: Vec<String>,
}

impl ScanResponse {
    pub fn new(analysis: ResourceAnalysis, resolved_subscriptions: Vec<String>) -> Self {
        Self {
            analysis,
            resolved_subscriptions,
        }
    }
}
