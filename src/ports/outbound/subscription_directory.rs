use crate::inventory::domain::Subscription;
use crate::shared::Result;
use async_trait::async_trait;

/// SubscriptionDirectory port for enumerating the tenant's subscriptions
///
/// Implementations return every subscription visible to the caller along
/// with its state; eligibility filtering happens in the resolver.
#[async_trait]
pub trait SubscriptionDirectory {
    /// Lists all subscriptions visible to the current credentials.
    ///
    /// # Errors
    /// Returns an error if the account directory cannot be reached
    /// (`EstateError::SubscriptionDirectoryUnavailable`).
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>>;
}
