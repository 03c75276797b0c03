use std::collections::HashMap;

/// Fallback for resource types the table does not know.
const NO_DESCRIPTION: &str = "No description available";

/// Built-in descriptions for common Azure resource types.
const BUILTIN_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Microsoft.Compute/virtualMachines",
        "Virtual machines for running applications and workloads",
    ),
    (
        "Microsoft.Storage/storageAccounts",
        "Storage accounts for data storage and file sharing",
    ),
    ("Microsoft.Web/sites", "App Service web applications and APIs"),
    ("Microsoft.Sql/servers", "Azure SQL Database servers"),
    ("Microsoft.Sql/servers/databases", "Azure SQL databases"),
    (
        "Microsoft.Network/virtualNetworks",
        "Virtual networks for network isolation",
    ),
    (
        "Microsoft.Network/networkSecurityGroups",
        "Network security groups for traffic filtering",
    ),
    (
        "Microsoft.Network/publicIPAddresses",
        "Public IP addresses for internet connectivity",
    ),
    (
        "Microsoft.Network/loadBalancers",
        "Load balancers for distributing traffic",
    ),
    (
        "Microsoft.Network/networkInterfaces",
        "Network interfaces for VM connectivity",
    ),
    (
        "Microsoft.KeyVault/vaults",
        "Key vaults for secrets and certificate management",
    ),
    (
        "Microsoft.Insights/components",
        "Application Insights for application monitoring",
    ),
    (
        "Microsoft.Authorization/roleAssignments",
        "Role assignments for access control",
    ),
    (
        "Microsoft.Resources/resourceGroups",
        "Resource groups for organizing resources",
    ),
    (
        "Microsoft.ContainerRegistry/registries",
        "Container registries for Docker images",
    ),
    (
        "Microsoft.ContainerService/managedClusters",
        "Azure Kubernetes Service clusters",
    ),
    (
        "Microsoft.ServiceBus/namespaces",
        "Service Bus namespaces for messaging",
    ),
    (
        "Microsoft.EventHub/namespaces",
        "Event Hub namespaces for event streaming",
    ),
    ("Microsoft.Logic/workflows", "Logic Apps for workflow automation"),
    (
        "Microsoft.Web/serverfarms",
        "App Service plans for hosting web apps",
    ),
    (
        "Microsoft.CognitiveServices/accounts",
        "Cognitive Services for AI capabilities",
    ),
    (
        "Microsoft.MachineLearningServices/workspaces",
        "Machine Learning workspaces",
    ),
    (
        "Microsoft.DocumentDB/databaseAccounts",
        "Cosmos DB database accounts",
    ),
    ("Microsoft.Cache/Redis", "Azure Cache for Redis"),
    ("Microsoft.ApiManagement/service", "API Management services"),
    (
        "Microsoft.DataFactory/factories",
        "Data Factory for data integration",
    ),
    (
        "Microsoft.StreamAnalytics/streamingjobs",
        "Stream Analytics for real-time analytics",
    ),
    (
        "Microsoft.Automation/automationAccounts",
        "Automation accounts for runbooks",
    ),
    (
        "Microsoft.RecoveryServices/vaults",
        "Recovery Services vaults for backup",
    ),
    (
        "Microsoft.Network/applicationGateways",
        "Application gateways for web traffic management",
    ),
    (
        "Microsoft.OperationalInsights/workspaces",
        "Log Analytics workspaces for monitoring and logging",
    ),
    ("Microsoft.Security/automations", "Security Center automation rules"),
    (
        "Microsoft.ManagedIdentity/userAssignedIdentities",
        "User-assigned managed identities",
    ),
    (
        "Microsoft.AlertsManagement/actionRules",
        "Action rules for alert management",
    ),
    (
        "Microsoft.Monitor/actionGroups",
        "Action groups for alert notifications",
    ),
];

/// DescriptionTable - immutable resource-type description lookup
///
/// Built once at startup and passed by reference into the aggregator.
/// Types absent from the table fall back to a fixed placeholder.
#[derive(Debug, Clone)]
pub struct DescriptionTable {
    entries: HashMap<String, String>,
}

impl DescriptionTable {
    /// The built-in table covering common Azure resource types.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_DESCRIPTIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Merges caller-supplied overrides on top of the current table.
    /// Overrides win on key collision.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.entries.extend(overrides);
        self
    }

    /// Looks up a description, falling back to the fixed placeholder.
    pub fn describe(&self, resource_type: &str) -> &str {
        self.entries
            .get(resource_type)
            .map(String::as_str)
            .unwrap_or(NO_DESCRIPTION)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = DescriptionTable::builtin();
        assert_eq!(
            table.describe("Microsoft.Compute/virtualMachines"),
            "Virtual machines for running applications and workloads"
        );
        assert_eq!(table.describe("Microsoft.Cache/Redis"), "Azure Cache for Redis");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let table = DescriptionTable::builtin();
        assert_eq!(
            table.describe("Contoso.Widgets/frobnicators"),
            "No description available"
        );
    }

    #[test]
    fn test_overrides_win() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "Microsoft.Cache/Redis".to_string(),
            "Session cache".to_string(),
        );
        overrides.insert("Contoso.Widgets/frobnicators".to_string(), "Widgets".to_string());

        let table = DescriptionTable::builtin().with_overrides(overrides);
        assert_eq!(table.describe("Microsoft.Cache/Redis"), "Session cache");
        assert_eq!(table.describe("Contoso.Widgets/frobnicators"), "Widgets");
        // untouched entries survive the merge
        assert_eq!(
            table.describe("Microsoft.Sql/servers"),
            "Azure SQL Database servers"
        );
    }
}
