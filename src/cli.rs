use clap::Parser;
use std::path::PathBuf;

/// Filter exported user groups down to production entries
#[derive(Parser, Debug)]
#[command(name = "group-filter")]
#[command(version)]
#[command(about = "Remove dev/test/UAT entries from an exported user-group CSV", long_about = None)]
pub struct FilterArgs {
    /// Input CSV of exported user groups (Name,Id columns)
    #[arg(short, long, default_value = "samples/user_groups.csv")]
    pub input: PathBuf,

    /// Output CSV for the surviving production entries
    #[arg(short, long, default_value = "samples/user_groups_prod.csv")]
    pub output: PathBuf,

    /// Additional environment markers to exclude, on top of the built-in set.
    /// Can be specified multiple times: -e "Staging" -e "Preview"
    #[arg(short = 'e', long = "exclude", value_name = "MARKER")]
    pub exclude: Vec<String>,
}

/// Inventory resources across target Azure subscriptions
#[derive(Parser, Debug)]
#[command(name = "resource-report")]
#[command(version)]
#[command(about = "Tally Azure resources by type, location and resource group", long_about = None)]
pub struct ReportArgs {
    /// Target subscription display name or id.
    /// Can be specified multiple times: -s SLProd -s SLSharedDR
    #[arg(short = 's', long = "subscription", value_name = "NAME_OR_ID", required = true)]
    pub subscriptions: Vec<String>,

    /// Path for the JSON analysis dump
    #[arg(short, long, default_value = "azure_resource_analysis_target_subs.json")]
    pub output: PathBuf,

    /// TOML file with [descriptions] entries overriding the built-in
    /// resource-type descriptions
    #[arg(long, value_name = "FILE")]
    pub descriptions: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_defaults() {
        let args = FilterArgs::parse_from(["group-filter"]);
        assert_eq!(args.input, PathBuf::from("samples/user_groups.csv"));
        assert_eq!(args.output, PathBuf::from("samples/user_groups_prod.csv"));
        assert!(args.exclude.is_empty());
    }

    #[test]
    fn test_filter_args_extra_markers() {
        let args = FilterArgs::parse_from(["group-filter", "-e", "Staging", "-e", "Preview"]);
        assert_eq!(args.exclude, vec!["Staging", "Preview"]);
    }

    #[test]
    fn test_report_args_subscriptions() {
        let args = ReportArgs::parse_from([
            "resource-report",
            "-s",
            "SLProd",
            "--subscription",
            "SLSharedDR",
        ]);
        assert_eq!(args.subscriptions, vec!["SLProd", "SLSharedDR"]);
        assert_eq!(
            args.output,
            PathBuf::from("azure_resource_analysis_target_subs.json")
        );
        assert!(args.descriptions.is_none());
    }

    #[test]
    fn test_report_args_require_a_subscription() {
        let result = ReportArgs::try_parse_from(["resource-report"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_args_output_override() {
        let args = ReportArgs::parse_from([
            "resource-report",
            "-s",
            "SLProd",
            "-o",
            "out/analysis.json",
        ]);
        assert_eq!(args.output, PathBuf::from("out/analysis.json"));
    }
}
