use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// Command isolated from the caller's environment and config files
fn atlas(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env_clear()
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .current_dir(dir.path());
    cmd
}

#[test]
fn routes_lists_the_table() {
    let dir = tempfile::tempdir().unwrap();
    atlas(&dir)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/categories"))
        .stdout(predicate::str::contains("/countries"))
        .stdout(predicate::str::contains("/languages"))
        .stdout(predicate::str::contains("All countries"));
}

#[test]
fn open_without_configuration_fails() {
    let dir = tempfile::tempdir().unwrap();
    atlas(&dir)
        .args(["open", "/countries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ATLAS_BASE_URL"));
}

#[test]
fn open_unknown_path_shows_not_found() {
    let dir = tempfile::tempdir().unwrap();
    atlas(&dir)
        .args(["--base-url", "http://127.0.0.1:9/api", "open", "/cities"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Page not found: /cities"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("atlas.json"),
        r#"{"base_url": "not a url"}"#,
    )
    .unwrap();

    atlas(&dir)
        .args(["open", "/countries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn unreachable_api_renders_error_state() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{
            "base_url": "http://127.0.0.1:9/api",
            "username": "reader",
            "password": "env:ATLAS_TEST_PASSWORD"
        }"#,
    )
    .unwrap();

    atlas(&dir)
        .env("ATLAS_TEST_PASSWORD", "opensesame")
        .arg("--config")
        .arg(&config)
        .args(["open", "/countries"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Could not load this list"));
}

#[test]
fn request_rejects_unknown_method() {
    let dir = tempfile::tempdir().unwrap();
    atlas(&dir)
        .args([
            "--base-url",
            "http://127.0.0.1:9/api",
            "request",
            "/countries",
            "-X",
            "PATCH",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported method"));
}

#[test]
fn browse_walks_history_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    atlas(&dir)
        .args(["--base-url", "http://127.0.0.1:9/api", "browse"])
        .write_stdin("/countries\nback\nforward\nforward\n/cities\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Countries\n\nCould not load this list"))
        .stdout(predicate::str::contains("Categories\n\nCould not load this list"))
        .stdout(predicate::str::contains("Nothing to go forward to"))
        .stdout(predicate::str::contains("Page not found: /cities"));
}

#[test]
fn browse_ends_at_end_of_input() {
    let dir = tempfile::tempdir().unwrap();
    atlas(&dir)
        .args(["--base-url", "http://127.0.0.1:9/api", "browse", "/cities"])
        .write_stdin("back\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page not found: /cities"))
        .stdout(predicate::str::contains("Nothing to show yet"))
        .stdout(predicate::str::contains("Nothing to go back to"));
}
