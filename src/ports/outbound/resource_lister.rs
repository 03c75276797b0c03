use crate::inventory::domain::Resource;
use crate::shared::Result;
use async_trait::async_trait;

/// ResourceLister port for enumerating the resources of one subscription
///
/// Implementations paginate transparently until the listing is exhausted
/// and return resources already tagged with their owning subscription and
/// extracted resource group.
#[async_trait]
pub trait ResourceLister {
    /// Lists every resource in the given subscription.
    ///
    /// # Errors
    /// Returns an error if the listing fails
    /// (`EstateError::ResourceListing`); the caller decides whether to
    /// absorb it.
    async fn list_resources(&self, subscription_id: &str) -> Result<Vec<Resource>>;
}
