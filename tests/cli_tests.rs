//! Integration tests for CLI functionality

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn cfctl_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("cfctl")
}

/// Command isolated from any real cf CLI login on the machine
fn cfctl(cf_home: &std::path::Path) -> Command {
    let mut cmd = Command::new(cfctl_bin());
    cmd.env("CF_HOME", cf_home)
        .env_remove("CFCTL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_cf_config(dir: &std::path::Path, api: &str, uaa: &str) -> std::path::PathBuf {
    let cf_dir = dir.join(".cf");
    std::fs::create_dir_all(&cf_dir).unwrap();
    let path = cf_dir.join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{
            "Target": "{}",
            "UaaEndpoint": "{}",
            "AccessToken": "bearer stale",
            "RefreshToken": "refresh-1",
            "UAAOAuthClient": "cf",
            "UAAOAuthClientSecret": ""
        }}"#,
        api, uaa
    )
    .unwrap();
    path
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    cfctl(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Explore Cloud Foundry"));
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    cfctl(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cfctl"));
}

#[test]
fn test_missing_command() {
    let home = tempfile::tempdir().unwrap();
    cfctl(home.path()).assert().failure();
}

#[test]
fn test_invalid_output_format() {
    let home = tempfile::tempdir().unwrap();
    cfctl(home.path())
        .args(["get", "orgs", "-o", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn test_missing_cf_config() {
    let home = tempfile::tempdir().unwrap();
    cfctl(home.path())
        .args(["get", "orgs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cf login"));
}

#[test]
fn test_malformed_cf_config() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("broken.json");
    std::fs::write(&config, "{ nope").unwrap();

    cfctl(home.path())
        .arg("--config")
        .arg(&config)
        .args(["get", "orgs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse cf CLI config"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_orgs_refreshes_token_and_walks_pages() {
    let api = MockServer::start().await;
    let uaa = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Authorization", "bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("page", "2"))
        .and(header("Authorization", "bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 2,
            "total_pages": 2,
            "next_url": null,
            "resources": [{
                "metadata": { "guid": "org-2" },
                "entity": { "name": "beta", "status": "active" }
            }]
        })))
        .expect(1)
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(header("Authorization", "bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 2,
            "total_pages": 2,
            "next_url": "/v2/organizations?page=2",
            "resources": [{
                "metadata": { "guid": "org-1" },
                "entity": { "name": "alpha", "status": "active" }
            }]
        })))
        .mount(&api)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "fresh",
            "refresh_token": "refresh-2"
        })))
        .expect(1)
        .mount(&uaa)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_cf_config(home.path(), &api.uri(), &uaa.uri());
    let home_path = home.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        cfctl(&home_path)
            .args(["get", "orgs", "-o", "json", "-q"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let orgs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(orgs[0]["entity"]["name"], "alpha");
    assert_eq!(orgs[1]["metadata"]["guid"], "org-2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_curl_reports_api_error() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/apps/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("CF-AppNotFound"))
        .mount(&api)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_cf_config(home.path(), &api.uri(), &api.uri());
    let home_path = home.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        cfctl(&home_path)
            .args(["curl", "/v2/apps/missing"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("404"));
    assert!(stderr.contains("CF-AppNotFound"));
}

fn single_page(resources: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "total_results": resources.as_array().map(|r| r.len()).unwrap_or(0),
        "total_pages": 1,
        "next_url": null,
        "resources": resources
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_single_org_by_guid() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/org-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "metadata": { "guid": "org-1" },
            "entity": { "name": "alpha", "status": "active" }
        })))
        .expect(1)
        .mount(&api)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_cf_config(home.path(), &api.uri(), &api.uri());
    let home_path = home.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        cfctl(&home_path)
            .args(["get", "orgs", "org-1", "-o", "json", "-q"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let orgs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(orgs.as_array().map(|o| o.len()), Some(1));
    assert_eq!(orgs[0]["entity"]["name"], "alpha");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_metrics_counts_per_org_and_space() {
    let api = MockServer::start().await;

    let lists = [
        (
            "/v2/organizations",
            serde_json::json!([
                { "metadata": { "guid": "o-1" }, "entity": { "name": "acme" } },
                { "metadata": { "guid": "o-2" }, "entity": { "name": "other" } }
            ]),
        ),
        (
            "/v2/spaces",
            serde_json::json!([
                { "metadata": { "guid": "s-1" },
                  "entity": { "name": "dev", "organization_guid": "o-1" } },
                { "metadata": { "guid": "s-2" },
                  "entity": { "name": "prod", "organization_guid": "o-1" } },
                { "metadata": { "guid": "s-3" },
                  "entity": { "name": "misc", "organization_guid": "o-2" } }
            ]),
        ),
        (
            "/v2/apps",
            serde_json::json!([
                { "metadata": { "guid": "a-1" },
                  "entity": { "name": "web", "space_guid": "s-1" } },
                { "metadata": { "guid": "a-2" },
                  "entity": { "name": "api", "space_guid": "s-2" } }
            ]),
        ),
        (
            "/v2/service_bindings",
            serde_json::json!([
                { "metadata": { "guid": "sb-1" },
                  "entity": { "app_guid": "a-2", "service_instance_guid": "si-1" } }
            ]),
        ),
        ("/v2/events", serde_json::json!([])),
    ];
    for (api_path, resources) in lists {
        Mock::given(method("GET"))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(single_page(resources)))
            .mount(&api)
            .await;
    }

    let home = tempfile::tempdir().unwrap();
    write_cf_config(home.path(), &api.uri(), &api.uri());
    let home_path = home.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        cfctl(&home_path)
            .args(["metrics", "--org", "acme", "-o", "json", "-q"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["scope"], "org");
    assert_eq!(rows[0]["apps"], 2);
    assert_eq!(rows[0]["service_bindings"], 1);
    assert_eq!(rows[1]["name"], "dev");
    assert_eq!(rows[1]["apps"], 1);
    assert_eq!(rows[2]["name"], "prod");
    assert_eq!(rows[2]["service_bindings"], 1);
}
