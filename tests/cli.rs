use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inventory(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inventory").unwrap();
    cmd.env("INVENTORY_CLI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn admin_session_persists_catalog() {
    let data_dir = TempDir::new().unwrap();

    inventory(&data_dir)
        .write_stdin("1\nadmin\n1234\n1\nP1\nPen\n10\n2.5\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Added Successfully!"))
        .stdout(predicate::str::contains("Total Inventory Value: 25.0"));

    let saved = std::fs::read_to_string(data_dir.path().join("inventory.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"P1": {"name": "Pen", "quantity": 10, "price": 2.5}})
    );
    assert!(saved.contains("\n    \"P1\": {\n        \"name\""));
}

#[test]
fn authentication_failure_exits_cleanly() {
    let data_dir = TempDir::new().unwrap();

    inventory(&data_dir)
        .write_stdin("1\nadmin\nnope\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Authentication Failed!"))
        .stdout(predicate::str::contains("Add Product").not())
        .stderr(predicate::str::contains("authentication rejected"));
}

#[test]
fn staff_update_writes_audit_line() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("inventory.json"),
        r#"{"P1": {"name": "Pen", "quantity": 10, "price": 2.5}}"#,
    )
    .unwrap();

    inventory(&data_dir)
        .write_stdin("2\nstaff\n1111\n2\nP1\n3\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("P1 | Pen | Qty: 3 | Price: 2.5"));

    let log = std::fs::read_to_string(data_dir.path().join("staff_log.txt")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.trim_end().ends_with(" - Staff updated stock of Product ID P1 to 3"));
}

#[test]
fn settings_file_overrides_credentials() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"staff": {"username": "clerk", "password": "pw"}}"#,
    )
    .unwrap();

    inventory(&data_dir)
        .write_stdin("2\nstaff\n1111\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Authentication Failed!"));

    inventory(&data_dir)
        .write_stdin("2\nclerk\npw\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Update Stock"));
}

#[test]
fn corrupt_catalog_is_a_hard_failure() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("inventory.json"), "{ not json").unwrap();

    inventory(&data_dir)
        .write_stdin("1\nadmin\n1234\n6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn invalid_product_in_catalog_is_a_hard_failure() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("inventory.json"),
        r#"{"P1": {"name": "Pen", "quantity": 10, "price": -2.5}}"#,
    )
    .unwrap();

    inventory(&data_dir)
        .write_stdin("1\nadmin\n1234\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("product P1"));
}

#[test]
fn config_command_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    inventory(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("inventory.json"))
        .stdout(predicate::str::contains("Low stock threshold: 5"))
        .stdout(predicate::str::contains("password").not());
}
