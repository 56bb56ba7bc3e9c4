use crate::common::{TestHome, assert_contains, init_test_logging};

#[test]
fn test_config_defaults() {
    init_test_logging();
    crate::test_log!("TEST START: test_config_defaults");

    let home = TestHome::new();
    let output = home
        .command()
        .arg("config")
        .output()
        .expect("Failed to run ferr config");

    assert!(output.status.success(), "ferr config failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_contains(&stdout, "config file     -");
    assert!(
        stdout
            .lines()
            .filter(|l| l.starts_with("log_") || l.starts_with("display_") || l.starts_with("wrap_"))
            .all(|l| l.ends_with("(default)")),
        "expected only defaults, got: {stdout}"
    );
    crate::test_log!("TEST PASS: test_config_defaults");
}

#[test]
fn test_config_file_and_env_sources() {
    init_test_logging();
    crate::test_log!("TEST START: test_config_file_and_env_sources");

    let home = TestHome::new();
    let path = home.write_config(
        r#"
[logging]
level = "warn"

[display]
format = "json"
wrap_width = 60
"#,
    );

    let output = home
        .command()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .env("FERR_WRAP_WIDTH", "40")
        .output()
        .expect("Failed to run ferr config");

    assert!(output.status.success(), "ferr config failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = |key: &str| {
        stdout
            .lines()
            .find(|l| l.starts_with(key))
            .unwrap_or_else(|| panic!("missing {key} in {stdout}"))
            .to_string()
    };
    assert_contains(&line("log_level"), "warn");
    assert_contains(&line("log_level"), &format!("(file {})", path.display()));
    assert_contains(&line("display_format"), "json");
    assert_contains(&line("wrap_width"), "40");
    assert_contains(&line("wrap_width"), "(env FERR_WRAP_WIDTH)");
    crate::test_log!("TEST PASS: test_config_file_and_env_sources");
}

#[test]
fn test_display_format_from_config_applies_to_show() {
    init_test_logging();
    crate::test_log!("TEST START: test_display_format_from_config_applies_to_show");

    let home = TestHome::new();
    let path = home.write_config("[display]\nformat = \"json\"\n");

    let output = home
        .command()
        .arg("--config")
        .arg(&path)
        .args(["show", "100663299"])
        .output()
        .expect("Failed to run ferr show");

    assert!(output.status.success(), "ferr show failed");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("configured JSON output");
    assert_eq!(value["100663299"]["title"], "Socket Error");
    crate::test_log!("TEST PASS: test_display_format_from_config_applies_to_show");
}

#[test]
fn test_missing_explicit_config_fails() {
    init_test_logging();
    crate::test_log!("TEST START: test_missing_explicit_config_fails");

    let home = TestHome::new();
    let output = home
        .command()
        .arg("--config")
        .arg(home.dir.path().join("absent.toml"))
        .arg("check")
        .output()
        .expect("Failed to run ferr check");

    assert!(!output.status.success(), "missing config must fail");
    assert_contains(
        &String::from_utf8_lossy(&output.stderr),
        "Failed to load configuration",
    );
    crate::test_log!("TEST PASS: test_missing_explicit_config_fails");
}

#[test]
fn test_unknown_config_key_fails() {
    init_test_logging();
    crate::test_log!("TEST START: test_unknown_config_key_fails");

    let home = TestHome::new();
    let path = home.write_config("[display]\ncolour = true\n");
    let output = home
        .command()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .output()
        .expect("Failed to run ferr config");

    assert!(!output.status.success(), "unknown key must fail");
    crate::test_log!("TEST PASS: test_unknown_config_key_fails");
}

#[test]
fn test_invalid_env_value_warns_and_falls_back() {
    init_test_logging();
    crate::test_log!("TEST START: test_invalid_env_value_warns_and_falls_back");

    let home = TestHome::new();
    let output = home
        .command()
        .arg("config")
        .env("FERR_WRAP_WIDTH", "wide")
        .output()
        .expect("Failed to run ferr config");

    assert!(output.status.success(), "invalid env value is not fatal");
    assert_contains(
        &String::from_utf8_lossy(&output.stderr),
        "Invalid value for FERR_WRAP_WIDTH",
    );
    assert_contains(&String::from_utf8_lossy(&output.stdout), "wrap_width      0 ");
    crate::test_log!("TEST PASS: test_invalid_env_value_warns_and_falls_back");
}
