use crate::common::{TestHome, assert_contains, assert_path_exists, init_test_logging};

#[test]
fn test_ferr_help_lists_subcommands() {
    init_test_logging();
    crate::test_log!("TEST START: test_ferr_help_lists_subcommands");

    let home = TestHome::new();
    let output = home
        .command()
        .arg("--help")
        .output()
        .expect("Failed to run ferr --help");

    assert!(output.status.success(), "ferr --help failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["show", "list", "check", "schema", "config"] {
        assert_contains(&stdout, name);
    }
    crate::test_log!("TEST PASS: test_ferr_help_lists_subcommands");
}

#[test]
fn test_show_single_code_text() {
    init_test_logging();
    crate::test_log!("TEST START: test_show_single_code_text");

    let home = TestHome::new();
    let output = home
        .command()
        .args(["show", "0x06000003"])
        .output()
        .expect("Failed to run ferr show");

    assert!(output.status.success(), "ferr show failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Error 100663299 - Socket Error");
    assert_eq!(lines[2], "=".repeat(30));
    assert_eq!(lines[3], "Description:");
    assert_contains(&stdout, "\nRecommendation:\n");
    crate::test_log!("TEST PASS: test_show_single_code_text");
}

#[test]
fn test_show_all_json() {
    init_test_logging();
    crate::test_log!("TEST START: test_show_all_json");

    let home = TestHome::new();
    let output = home
        .command()
        .args(["show", "all", "--json"])
        .output()
        .expect("Failed to run ferr show all --json");

    assert!(output.status.success(), "ferr show all --json failed");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("show --json is valid JSON");
    let object = value.as_object().expect("top level is an object");
    assert_eq!(object.len(), 20);
    assert_eq!(object["100663298"]["title"], "VRF Failure on Start");
    assert!(object.values().all(|v| v["suggestion"].is_string()));
    crate::test_log!("TEST PASS: test_show_all_json");
}

#[test]
fn test_show_unknown_code_fails() {
    init_test_logging();
    crate::test_log!("TEST START: test_show_unknown_code_fails");

    let home = TestHome::new();
    // Offset 17 of the library range is reserved and never registered.
    let output = home
        .command()
        .args(["show", "100663314"])
        .output()
        .expect("Failed to run ferr show");

    assert!(!output.status.success(), "unknown code must fail");
    assert!(output.stdout.is_empty());
    assert_contains(
        &String::from_utf8_lossy(&output.stderr),
        "Code 100663314 - Unknown",
    );
    crate::test_log!("TEST PASS: test_show_unknown_code_fails");
}

#[test]
fn test_show_rejects_malformed_selector() {
    init_test_logging();
    crate::test_log!("TEST START: test_show_rejects_malformed_selector");

    let home = TestHome::new();
    for bad in ["bogus", "0", "0xffffffff"] {
        let output = home
            .command()
            .args(["show", bad])
            .output()
            .expect("Failed to run ferr show");
        assert_eq!(output.status.code(), Some(2), "selector {bad} accepted");
    }
    crate::test_log!("TEST PASS: test_show_rejects_malformed_selector");
}

#[test]
fn test_check_passes() {
    init_test_logging();
    crate::test_log!("TEST START: test_check_passes");

    let home = TestHome::new();
    let output = home
        .command()
        .arg("check")
        .output()
        .expect("Failed to run ferr check");

    assert!(output.status.success(), "ferr check failed");
    assert_contains(
        &String::from_utf8_lossy(&output.stdout),
        "ok: 20 log references in 2 tables",
    );
    crate::test_log!("TEST PASS: test_check_passes");
}

#[test]
fn test_list_json_catalog() {
    init_test_logging();
    crate::test_log!("TEST START: test_list_json_catalog");

    let home = TestHome::new();
    let output = home
        .command()
        .args(["list", "--json"])
        .output()
        .expect("Failed to run ferr list --json");

    assert!(output.status.success(), "ferr list --json failed");
    let catalog: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json is valid JSON");
    assert_eq!(catalog["schema_version"], "1.0");
    let entries = catalog["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 20);
    assert_eq!(entries[0]["kind"], "warning");
    assert_eq!(entries[0]["hex"], "0x0600000e");
    assert_eq!(entries[0]["range"], "lib");
    crate::test_log!("TEST PASS: test_list_json_catalog");
}

#[test]
fn test_list_filters_by_kind() {
    init_test_logging();
    crate::test_log!("TEST START: test_list_filters_by_kind");

    let home = TestHome::new();
    let output = home
        .command()
        .args(["list", "--warnings"])
        .output()
        .expect("Failed to run ferr list --warnings");

    assert!(output.status.success(), "ferr list --warnings failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines.iter().all(|l| l.split(' ').nth(2) == Some("warning")));
    assert_eq!(lines[0], "100663310 0x0600000e warning SNMP has discovered a warning");

    let output = home
        .command()
        .args(["list", "--warnings", "--errors"])
        .output()
        .expect("Failed to run ferr list");
    assert!(!output.status.success(), "--warnings and --errors conflict");
    crate::test_log!("TEST PASS: test_list_filters_by_kind");
}

#[test]
fn test_schema_stdout_and_export() {
    init_test_logging();
    crate::test_log!("TEST START: test_schema_stdout_and_export");

    let home = TestHome::new();
    let output = home
        .command()
        .arg("schema")
        .output()
        .expect("Failed to run ferr schema");
    assert!(output.status.success(), "ferr schema failed");
    let schema: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("schema is valid JSON");
    assert_eq!(schema["title"], "LogRefView");

    let out = home.dir.path().join("schemas");
    let output = home
        .command()
        .args(["schema", "--out"])
        .arg(&out)
        .output()
        .expect("Failed to run ferr schema --out");
    assert!(output.status.success(), "ferr schema --out failed");
    assert_path_exists(&out.join("log-ref.schema.json"));
    assert_path_exists(&out.join("log-ref-catalog.json"));
    crate::test_log!("TEST PASS: test_schema_stdout_and_export");
}

#[test]
fn test_show_default_prints_published_text() {
    init_test_logging();
    crate::test_log!("TEST START: test_show_default_prints_published_text");

    let home = TestHome::new();
    let output = home
        .command()
        .args(["show", "0x06000011"])
        .output()
        .expect("Failed to run ferr show");

    assert!(output.status.success(), "ferr show failed");
    assert_contains(
        &String::from_utf8_lossy(&output.stdout),
        "Description:\nThe Event subsystem has detected a slow process, this typically indicates \
         that FRR is having trouble completing work in a timely manner.  This can be either a \
         misconfiguration, bug, or some combination therof.\n\n",
    );
    crate::test_log!("TEST PASS: test_show_default_prints_published_text");
}
