use crate::adapters::outbound::azure::AzureCliCredential;
use crate::inventory::domain::{Resource, Subscription};
use crate::ports::outbound::{ResourceLister, SubscriptionDirectory};
use crate::shared::error::EstateError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const ARM_ENDPOINT: &str = "https://management.azure.com";
const SUBSCRIPTIONS_API_VERSION: &str = "2020-01-01";
const RESOURCES_API_VERSION: &str = "2021-04-01";

/// One page of an ARM collection response.
#[derive(Debug, Deserialize)]
struct Page<T> {
    value: Vec<T>,
    #[serde(rename = "nextLink")]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionEntry {
    #[serde(rename = "subscriptionId")]
    subscription_id: String,
    #[serde(rename = "displayName")]
    display_name: String,
    state: String,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    id: String,
    name: String,
    #[serde(rename = "type")]
    resource_type: String,
    location: String,
}

/// ArmClient adapter for the Azure Resource Manager REST API
///
/// Implements both SubscriptionDirectory and ResourceLister. Collection
/// endpoints are paginated; the client follows `nextLink` sequentially
/// until exhaustion. Cloning is cheap: the HTTP client and credential are
/// shared.
#[derive(Clone)]
pub struct ArmClient {
    http: reqwest::Client,
    credential: Arc<AzureCliCredential>,
}

impl ArmClient {
    /// Creates a new ARM client with default configuration
    pub fn new(credential: AzureCliCredential) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("azure-estate/{}", version);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            credential: Arc::new(credential),
        })
    }

    /// Fetches every page of a collection, following `nextLink`.
    async fn get_all_pages<T: DeserializeOwned>(&self, first_url: String) -> Result<Vec<T>> {
        let token = self.credential.token().await?;
        let mut items = Vec::new();
        let mut next_url = Some(first_url);

        while let Some(url) = next_url {
            let response = self.http.get(&url).bearer_auth(&token).send().await?;

            if !response.status().is_success() {
                anyhow::bail!("ARM API returned status code {}", response.status());
            }

            let page: Page<T> = response.json().await?;
            items.extend(page.value);
            next_url = page.next_link;
        }

        Ok(items)
    }
}

#[async_trait]
impl SubscriptionDirectory for ArmClient {
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        let url = format!(
            "{}/subscriptions?api-version={}",
            ARM_ENDPOINT, SUBSCRIPTIONS_API_VERSION
        );
        let entries: Vec<SubscriptionEntry> =
            self.get_all_pages(url)
                .await
                .map_err(|e| EstateError::SubscriptionDirectoryUnavailable {
                    details: e.to_string(),
                })?;

        Ok(entries
            .into_iter()
            .map(|entry| Subscription::new(entry.display_name, entry.subscription_id, entry.state))
            .collect())
    }
}

#[async_trait]
impl ResourceLister for ArmClient {
    async fn list_resources(&self, subscription_id: &str) -> Result<Vec<Resource>> {
        let url = format!(
            "{}/subscriptions/{}/resources?api-version={}",
            ARM_ENDPOINT, subscription_id, RESOURCES_API_VERSION
        );
        let entries: Vec<ResourceEntry> =
            self.get_all_pages(url)
                .await
                .map_err(|e| EstateError::ResourceListing {
                    subscription_id: subscription_id.to_string(),
                    details: e.to_string(),
                })?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                Resource::from_listing(
                    &entry.id,
                    entry.resource_type,
                    entry.name,
                    entry.location,
                    subscription_id,
                )
            })
            .collect())
    }
}
