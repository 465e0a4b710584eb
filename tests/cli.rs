use assert_cmd::Command;
use predicates::prelude::*;

fn prodfilter(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prodfilter").unwrap();
    cmd.env("PRODFILTER_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_demo_is_default() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Green products:"))
        .stdout(predicate::str::contains(" * Apple is green"))
        .stdout(predicate::str::contains(" * Tree  is green"))
        .stdout(predicate::str::contains("Large and blue products:"))
        .stdout(predicate::str::contains(" * House is large and blue"))
        .stdout(predicate::str::contains("Pebble").not());
}

#[test]
fn test_demo_prints_matches_in_catalog_order() {
    let home = tempfile::tempdir().unwrap();

    let output = prodfilter(&home).arg("demo").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let apple = stdout.find("Apple").unwrap();
    let tree = stdout.find("Tree").unwrap();
    let house = stdout.find("House").unwrap();
    assert!(apple < tree && tree < house);
    assert!(!stdout.contains("\u{1b}["));
}

#[test]
fn test_list_by_flags() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .args(["list", "--color", "blue", "--size", "large"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Products matching color=blue and size=large:",
        ))
        .stdout(predicate::str::contains(" * House"))
        .stdout(predicate::str::contains("Apple").not());
}

#[test]
fn test_list_by_criteria() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .args(["ls", "color=green"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" * Apple\n * Tree\n"));
}

#[test]
fn test_list_without_criteria_lists_everything() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Products matching everything:"))
        .stdout(predicate::str::contains(" * Apple\n * Tree\n * House\n"));
}

#[test]
fn test_list_no_matches() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .args(["list", "--color", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn test_list_contradiction_warns() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .args(["list", "--size", "small", "--size", "large"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No product can match"));
}

#[test]
fn test_unknown_flag_value_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .args(["list", "--color", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("purple"));
}

#[test]
fn test_bad_criterion_is_an_error() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .args(["list", "shape=round"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid criterion 'shape=round'"));
}

#[test]
fn test_config_bullet() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("prodfilter.json"),
        r#"{"bullet": "- ", "color": false}"#,
    )
    .unwrap();

    prodfilter(&home)
        .args(["list", "--size", "medium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Tree"));
}

#[test]
fn test_malformed_config_fails() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("prodfilter.json"), "{").unwrap();

    prodfilter(&home)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let home = tempfile::tempdir().unwrap();

    prodfilter(&home)
        .args(["-v", "list", "--color", "green"])
        .assert()
        .success()
        .stderr(predicate::str::contains("filtered catalog"))
        .stdout(predicate::str::contains("filtered catalog").not());
}
