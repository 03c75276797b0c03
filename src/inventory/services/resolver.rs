use crate::inventory::domain::Subscription;
use std::collections::HashMap;

/// One resolved target: the caller's spelling plus the subscription id it
/// mapped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMatch {
    pub target: String,
    pub subscription_id: String,
}

/// Outcome of resolving a target list against the account directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Matches in input-target order.
    pub matched: Vec<TargetMatch>,
    /// Targets with no enabled match, in input order.
    pub missing: Vec<String>,
}

impl Resolution {
    pub fn subscription_ids(&self) -> Vec<String> {
        self.matched
            .iter()
            .map(|m| m.subscription_id.clone())
            .collect()
    }
}

/// Resolves target subscription names or ids against the enabled
/// subscriptions of the tenant.
///
/// Both the display name and the id are valid keys; disabled subscriptions
/// are invisible to resolution. Output order follows the input target
/// list, and unmatched targets are collected rather than dropped silently.
pub fn resolve_targets(subscriptions: &[Subscription], targets: &[String]) -> Resolution {
    let mut lookup: HashMap<&str, &str> = HashMap::new();
    for subscription in subscriptions.iter().filter(|s| s.is_enabled()) {
        lookup.insert(&subscription.display_name, &subscription.id);
        lookup.insert(&subscription.id, &subscription.id);
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for target in targets {
        match lookup.get(target.as_str()) {
            Some(id) => matched.push(TargetMatch {
                target: target.clone(),
                subscription_id: (*id).to_string(),
            }),
            None => missing.push(target.clone()),
        }
    }

    Resolution { matched, missing }
}
