use async_trait::async_trait;
use azure_estate::prelude::*;
use std::collections::HashMap;

/// Mock ResourceLister serving canned per-subscription resource lists.
/// Subscriptions in `failing` error instead.
pub struct MockResourceLister {
    pub by_subscription: HashMap<String, Vec<Resource>>,
    pub failing: Vec<String>,
}

impl MockResourceLister {
    pub fn new() -> Self {
        Self {
            by_subscription: HashMap::new(),
            failing: Vec::new(),
        }
    }

    pub fn with_resources(mut self, subscription_id: &str, resources: Vec<Resource>) -> Self {
        self.by_subscription
            .insert(subscription_id.to_string(), resources);
        self
    }

    pub fn with_failing(mut self, subscription_id: &str) -> Self {
        self.failing.push(subscription_id.to_string());
        self
    }
}

#[async_trait]
impl ResourceLister for MockResourceLister {
    async fn list_resources(&self, subscription_id: &str) -> Result<Vec<Resource>> {
        if self.failing.iter().any(|s| s == subscription_id) {
            return Err(EstateError::ResourceListing {
                subscription_id: subscription_id.to_string(),
                details: "Mock listing failure".to_string(),
            }
            .into());
        }
        Ok(self
            .by_subscription
            .get(subscription_id)
            .cloned()
            .unwrap_or_default())
    }
}
