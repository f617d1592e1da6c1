mod common;

use assert_cmd::Command;
use common::{ASSETS_JSON, TOKEN, bearer};
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn assetdesk(server_url: &str, sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("assetdesk").unwrap();
    cmd.current_dir(sandbox.path())
        .env_clear()
        .env("BASE_URL", server_url)
        .env("HOME", sandbox.path())
        .env("XDG_CACHE_HOME", sandbox.path().join("cache"))
        .env("LANG", "en_US.UTF-8");
    cmd
}

#[test]
fn test_assets_command_prints_cards() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/assets")
        .with_status(200)
        .with_body(ASSETS_JSON)
        .create();
    let sandbox = tempfile::tempdir().unwrap();

    assetdesk(&server.url(), &sandbox)
        .arg("assets")
        .assert()
        .success()
        .stdout(predicate::str::contains("ThinkPad X1"))
        .stdout(predicate::str::contains("Assigned To"))
        .stdout(predicate::str::contains("Spare Monitor"));
    mock.assert();
}

#[test]
fn test_report_command_requires_token() {
    let server = mockito::Server::new();
    let sandbox = tempfile::tempdir().unwrap();
    assetdesk(&server.url(), &sandbox)
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));
}

#[test]
fn test_report_command_with_filters() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/report/assets")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "live".into()),
            Matcher::UrlEncoded("asset_type".into(), "Laptop".into()),
        ]))
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(ASSETS_JSON)
        .create();
    let sandbox = tempfile::tempdir().unwrap();

    assetdesk(&server.url(), &sandbox)
        .env("API_TOKEN", TOKEN)
        .args(["report", "--status", "live", "--type", "Laptop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Department"))
        .stdout(predicate::str::contains("ThinkPad X1"))
        .stdout(predicate::str::contains("—"));
    mock.assert();
}

#[test]
fn test_report_command_rejects_bad_date_without_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create();
    let sandbox = tempfile::tempdir().unwrap();

    assetdesk(&server.url(), &sandbox)
        .env("API_TOKEN", TOKEN)
        .args(["report", "--from", "01/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter"));
    mock.assert();
}

#[test]
fn test_export_command_saves_file() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/report/assets/export/csv")
        .match_query(Matcher::UrlEncoded("department".into(), "IT".into()))
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body("id,device_name\n11,ThinkPad X1\n")
        .create();
    let sandbox = tempfile::tempdir().unwrap();
    let out = sandbox.path().join("downloads");

    assetdesk(&server.url(), &sandbox)
        .env("API_TOKEN", TOKEN)
        .args(["export", "csv", "--department", "IT", "--out-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("assets_report.csv"));
    mock.assert();
    assert_eq!(
        fs::read_to_string(out.join("assets_report.csv")).unwrap(),
        "id,device_name\n11,ThinkPad X1\n"
    );
}

#[test]
fn test_missing_base_url_fails() {
    let sandbox = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("assetdesk").unwrap();
    cmd.current_dir(sandbox.path())
        .env_clear()
        .env("HOME", sandbox.path())
        .arg("debug")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BASE_URL"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_token_set_status_clear() {
    let server = mockito::Server::new();
    let sandbox = tempfile::tempdir().unwrap();

    assetdesk(&server.url(), &sandbox)
        .args(["token", "set", "stored-token-xyz"])
        .assert()
        .success();
    assert!(sandbox
        .path()
        .join("cache/librassetdesk/session.json")
        .exists());

    assetdesk(&server.url(), &sandbox)
        .args(["token", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SESSION STORED"))
        .stdout(predicate::str::contains("stored-token-xyz").not());

    assetdesk(&server.url(), &sandbox)
        .args(["token", "clear"])
        .assert()
        .success();
    assetdesk(&server.url(), &sandbox)
        .args(["token", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NO STORED SESSION"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_debug_command_shows_session_paths() {
    let server = mockito::Server::new();
    let sandbox = tempfile::tempdir().unwrap();
    assetdesk(&server.url(), &sandbox)
        .arg("debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session dir"))
        .stdout(predicate::str::contains("cache/librassetdesk"))
        .stdout(predicate::str::contains("Session file"));
}
