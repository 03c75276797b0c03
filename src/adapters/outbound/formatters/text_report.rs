use crate::inventory::domain::ResourceAnalysis;

/// 80-column banner framing the report header.
const BANNER: &str =
    "================================================================================";

/// 50-column separator opening the top-locations and top-groups sections.
const SECTION_RULE: &str = "==================================================";

/// Rule under the resource-types heading (50 columns).
const TYPES_RULE: &str = "--------------------------------------------------";

/// Rule under the subscription-distribution heading (30 columns).
const DISTRIBUTION_RULE: &str = "------------------------------";

/// Rule under the top-locations heading (20 columns).
const LOCATIONS_RULE: &str = "--------------------";

/// Rule under the top-resource-groups heading (22 columns).
const GROUPS_RULE: &str = "----------------------";

/// TextReportFormatter - renders a ResourceAnalysis as the fixed-layout
/// text report
///
/// The layout is line-oriented and stable so downstream golden tests can
/// compare output byte for byte. Sections for empty maps are omitted;
/// the header and the resource-types heading always render.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, analysis: &ResourceAnalysis) -> String {
        let mut lines: Vec<String> = Vec::new();

        self.render_header(&mut lines, analysis);
        self.render_subscription_distribution(&mut lines, analysis);
        self.render_resource_types(&mut lines, analysis);
        self.render_top_locations(&mut lines, analysis);
        self.render_top_resource_groups(&mut lines, analysis);

        lines.join("\n")
    }

    fn render_header(&self, lines: &mut Vec<String>, analysis: &ResourceAnalysis) {
        lines.push(BANNER.to_string());
        lines.push("AZURE RESOURCE TYPE ANALYSIS REPORT".to_string());
        lines.push(format!(
            "TARGET SUBSCRIPTIONS: {}",
            analysis.subscriptions_scanned.join(", ")
        ));
        lines.push(BANNER.to_string());
        lines.push(format!("Total Resources: {}", analysis.total_resources));
        lines.push(format!(
            "Unique Resource Types: {}",
            analysis.unique_type_count()
        ));
        lines.push(String::new());
    }

    fn render_subscription_distribution(
        &self,
        lines: &mut Vec<String>,
        analysis: &ResourceAnalysis,
    ) {
        if analysis.subscription_distribution.is_empty() {
            return;
        }
        lines.push("SUBSCRIPTION DISTRIBUTION:".to_string());
        lines.push(DISTRIBUTION_RULE.to_string());
        for (subscription_id, count) in &analysis.subscription_distribution {
            lines.push(format!("  {}: {} resources", subscription_id, count));
        }
        lines.push(String::new());
    }

    fn render_resource_types(&self, lines: &mut Vec<String>, analysis: &ResourceAnalysis) {
        lines.push("RESOURCE TYPES BY COUNT:".to_string());
        lines.push(TYPES_RULE.to_string());
        for (resource_type, breakdown) in &analysis.resource_types {
            lines.push(format!("\n{}", resource_type));
            lines.push(format!(
                "  Count: {} ({}%)",
                breakdown.count,
                format_percent(breakdown.percentage)
            ));
            lines.push(format!("  Description: {}", breakdown.description));
        }
    }

    fn render_top_locations(&self, lines: &mut Vec<String>, analysis: &ResourceAnalysis) {
        if analysis.top_locations.is_empty() {
            return;
        }
        lines.push(format!("\n{}", SECTION_RULE));
        lines.push("TOP LOCATIONS:".to_string());
        lines.push(LOCATIONS_RULE.to_string());
        for (location, count) in &analysis.top_locations {
            lines.push(format!("  {}: {} resources", location, count));
        }
    }

    fn render_top_resource_groups(&self, lines: &mut Vec<String>, analysis: &ResourceAnalysis) {
        if analysis.top_resource_groups.is_empty() {
            return;
        }
        lines.push(format!("\n{}", SECTION_RULE));
        lines.push("TOP RESOURCE GROUPS:".to_string());
        lines.push(GROUPS_RULE.to_string());
        for (resource_group, count) in &analysis.top_resource_groups {
            lines.push(format!("  {}: {} resources", resource_group, count));
        }
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a percentage with at least one and at most two decimals,
/// matching the report's historical output ("75.0", "33.33").
fn format_percent(value: f64) -> String {
    let mut formatted = format!("{:.2}", value);
    if formatted.ends_with('0') {
        formatted.pop();
    }
    formatted
}
