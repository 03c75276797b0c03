/// End-to-end tests for the CLI binaries
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_group_filter_help() {
        cargo_bin_cmd!("group-filter").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_group_filter_version() {
        cargo_bin_cmd!("group-filter").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_group_filter_invalid_option() {
        cargo_bin_cmd!("group-filter")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - input file does not exist
    #[test]
    fn test_group_filter_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("group-filter")
            .args(["-i", "absent.csv", "-o", "out.csv"])
            .current_dir(temp_dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Input file not found"));
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_resource_report_help() {
        cargo_bin_cmd!("resource-report").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_resource_report_version() {
        cargo_bin_cmd!("resource-report").arg("--version").assert().code(0);
    }

    /// Exit code 2: a target subscription is required
    #[test]
    fn test_resource_report_requires_subscription() {
        cargo_bin_cmd!("resource-report").assert().code(2);
    }
}

#[test]
fn test_group_filter_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("user_groups.csv");
    let output = temp_dir.path().join("user_groups_prod.csv");
    fs::write(
        &input,
        "Name,Id\nApp-DEV-01,1\nApp-PROD-01,2\nBilling-UAT,3\nBilling-Live,4\n",
    )
    .unwrap();

    cargo_bin_cmd!("group-filter")
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Total entries processed: 4"))
        .stdout(predicate::str::contains("Entries excluded: 2"))
        .stdout(predicate::str::contains("Production entries saved: 2"))
        .stderr(predicate::str::contains("Excluded: App-DEV-01"))
        .stderr(predicate::str::contains("Excluded: Billing-UAT"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Name,Id\nApp-PROD-01,2\nBilling-Live,4\n");
}

#[test]
fn test_group_filter_bom_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("user_groups.csv");
    let output = temp_dir.path().join("user_groups_prod.csv");
    let mut bytes = b"\xef\xbb\xbf".to_vec();
    bytes.extend_from_slice(b"Name,Id\nApp-DEV-01,1\nApp-PROD-01,2\n");
    fs::write(&input, bytes).unwrap();

    cargo_bin_cmd!("group-filter")
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Production entries saved: 1"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Name,Id\nApp-PROD-01,2\n");
}

#[test]
fn test_group_filter_no_survivors_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("user_groups.csv");
    let output = temp_dir.path().join("user_groups_prod.csv");
    fs::write(&input, "Name,Id\nApp-DEV-01,1\nApp-UAT-01,2\n").unwrap();

    cargo_bin_cmd!("group-filter")
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("No production entries found to save."));

    assert!(!output.exists());
}

#[test]
fn test_group_filter_output_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("user_groups.csv");
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");
    fs::write(
        &input,
        "Name,Id\nApp-DEV-01,1\nApp-PROD-01,2\nQA-harness,3\n",
    )
    .unwrap();

    cargo_bin_cmd!("group-filter")
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&first)
        .assert()
        .code(0);

    cargo_bin_cmd!("group-filter")
        .args(["-i"])
        .arg(&first)
        .args(["-o"])
        .arg(&second)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Entries excluded: 0"));

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_group_filter_extra_markers() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("user_groups.csv");
    let output = temp_dir.path().join("out.csv");
    fs::write(&input, "Name,Id\nApp-Staging-01,1\nApp-PROD-01,2\n").unwrap();

    cargo_bin_cmd!("group-filter")
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .args(["-e", "Staging"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Excluded: App-Staging-01"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Name,Id\nApp-PROD-01,2\n");
}
