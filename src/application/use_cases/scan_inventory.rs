use crate::application::dto::{ScanRequest, ScanResponse};
use crate::inventory::domain::Resource;
use crate::inventory::services::{analyze, resolve_targets, DescriptionTable};
use crate::ports::outbound::{ProgressReporter, ResourceLister, SubscriptionDirectory};
use crate::shared::Result;

/// ScanInventoryUseCase - Core use case for the inventory pipeline
///
/// Resolves the target subscriptions, lists their resources sequentially,
/// and aggregates the result. A failure listing one subscription degrades
/// to an empty list for that subscription; the remaining targets still
/// run. A failure listing the account directory itself propagates.
///
/// # Type Parameters
/// * `D` - SubscriptionDirectory implementation
/// * `L` - ResourceLister implementation
/// * `P` - ProgressReporter implementation
pub struct ScanInventoryUseCase<D, L, P> {
    directory: D,
    lister: L,
    descriptions: DescriptionTable,
    progress_reporter: P,
}

impl<D, L, P> ScanInventoryUseCase<D, L, P>
where
    D: SubscriptionDirectory,
    L: ResourceLister,
    P: ProgressReporter,
{
    /// Creates a new ScanInventoryUseCase with injected dependencies
    pub fn new(directory: D, lister: L, descriptions: DescriptionTable, progress_reporter: P) -> Self {
        Self {
            directory,
            lister,
            descriptions,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Returns
    /// A ScanResponse whose analysis is zero-valued when no target
    /// resolved or no resources were found.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        let resolved = self.resolve_subscriptions(&request).await?;

        if resolved.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: No target subscriptions found!");
            let analysis = analyze(&[], &self.descriptions, &request.targets);
            return Ok(ScanResponse::new(analysis, vec![]));
        }

        let resources = self.collect_resources(&resolved).await;

        let analysis = analyze(&resources, &self.descriptions, &request.targets);
        self.progress_reporter.report_completion(&format!(
            "✅ Scan complete: {} resource(s) across {} subscription(s)",
            analysis.total_resources,
            resolved.len()
        ));

        Ok(ScanResponse::new(analysis, resolved))
    }

    /// Resolves the target list against the enabled subscriptions,
    /// reporting every hit and miss individually.
    async fn resolve_subscriptions(&self, request: &ScanRequest) -> Result<Vec<String>> {
        self.progress_reporter
            .report("🔎 Listing enabled subscriptions...");

        let subscriptions = self.directory.list_subscriptions().await?;

        self.progress_reporter.report("Available enabled subscriptions:");
        for subscription in subscriptions.iter().filter(|s| s.is_enabled()) {
            self.progress_reporter.report(&format!(
                "  - {} ({})",
                subscription.display_name, subscription.id
            ));
        }

        let resolution = resolve_targets(&subscriptions, &request.targets);
        for matched in &resolution.matched {
            self.progress_reporter
                .report(&format!("✓ Found target subscription: {}", matched.target));
        }
        for missing in &resolution.missing {
            self.progress_reporter.report_error(&format!(
                "✗ Target subscription not found or not enabled: {}",
                missing
            ));
        }

        Ok(resolution.subscription_ids())
    }

    /// Lists every resolved subscription sequentially, absorbing
    /// per-subscription failures.
    async fn collect_resources(&self, subscription_ids: &[String]) -> Vec<Resource> {
        self.progress_reporter.report(&format!(
            "\nScanning {} target subscription(s)...",
            subscription_ids.len()
        ));

        let total = subscription_ids.len();
        let mut resources = Vec::new();
        for (index, subscription_id) in subscription_ids.iter().enumerate() {
            self.progress_reporter
                .report(&format!("Scanning subscription {}...", subscription_id));

            match self.lister.list_resources(subscription_id).await {
                Ok(listed) => {
                    self.progress_reporter.report(&format!(
                        "Found {} resources in subscription {}",
                        listed.len(),
                        subscription_id
                    ));
                    resources.extend(listed);
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Skipping subscription {}: {}",
                        subscription_id, e
                    ));
                }
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(subscription_id));
        }

        resources
    }
}
