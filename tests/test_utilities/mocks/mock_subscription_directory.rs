use async_trait::async_trait;
use azure_estate::prelude::*;

/// Mock SubscriptionDirectory for testing
pub struct MockSubscriptionDirectory {
    pub subscriptions: Vec<Subscription>,
    pub should_fail: bool,
}

impl MockSubscriptionDirectory {
    pub fn new(subscriptions: Vec<Subscription>) -> Self {
        Self {
            subscriptions,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            subscriptions: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl SubscriptionDirectory for MockSubscriptionDirectory {
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        if self.should_fail {
            return Err(EstateError::SubscriptionDirectoryUnavailable {
                details: "Mock directory failure".to_string(),
            }
            .into());
        }
        Ok(self.subscriptions.clone())
    }
}
