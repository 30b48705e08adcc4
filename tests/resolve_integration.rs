use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_resolve_prints_matching_path() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("index.phtml"), "<h1>hi</h1>").unwrap();

    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("resolve")
        .arg("index")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("index.phtml"));
}

#[test]
fn test_resolve_first_match_wins_across_paths() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    std::fs::write(first.path().join("page.phtml"), "first").unwrap();
    std::fs::write(second.path().join("page.phtml"), "second").unwrap();

    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    let output = cmd
        .arg("resolve")
        .arg("page")
        .arg("--path")
        .arg(first.path())
        .arg("--path")
        .arg(second.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let resolved = std::fs::read_to_string(stdout.trim()).unwrap();
    assert_eq!(resolved, "first");
}

#[test]
fn test_resolve_custom_suffix() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("page.tpl"), "custom").unwrap();

    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("resolve")
        .arg("page")
        .arg("--path")
        .arg(temp.path())
        .arg("--suffix")
        .arg(".tpl")
        .assert()
        .success()
        .stdout(predicates::str::contains("page.tpl"));
}

#[test]
fn test_resolve_miss_exits_one() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("resolve")
        .arg("missing")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn test_resolve_no_paths_exits_one() {
    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("resolve")
        .arg("anything")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("no search paths"));
}

#[test]
fn test_resolve_traversal_exits_two() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("resolve")
        .arg("../secret")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("parent directory traversal"));
}

#[test]
fn test_resolve_traversal_allowed_with_no_lfi() {
    let temp = tempfile::tempdir().unwrap();
    let views = temp.path().join("views");
    std::fs::create_dir(&views).unwrap();
    std::fs::write(temp.path().join("outside.phtml"), "escaped").unwrap();

    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("resolve")
        .arg("../outside")
        .arg("--path")
        .arg(&views)
        .arg("--no-lfi")
        .assert()
        .success()
        .stdout(predicates::str::contains("outside.phtml"));
}

#[test]
fn test_paths_prints_normalized_entries_in_order() {
    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("paths")
        .arg("--path")
        .arg("/srv/views/")
        .arg("--path")
        .arg("/srv/themes")
        .assert()
        .success()
        .stdout(predicates::str::contains("/srv/views/\n/srv/themes/"));
}

#[test]
fn test_config_file_supplies_paths_and_suffix() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("page.tpl"), "from config").unwrap();

    let config_path = temp.path().join("resolver.json");
    let config = format!(
        r#"{{"script_paths": ["{}"], "default_suffix": "tpl"}}"#,
        temp.path().display()
    );
    std::fs::write(&config_path, config).unwrap();

    let mut cmd = Command::cargo_bin("viewkit").unwrap();
    cmd.arg("resolve")
        .arg("page")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("page.tpl"));
}
